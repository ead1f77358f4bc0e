// [aiservers]
// aiserver1 ansible_host=10.0.0.5 ansible_user=ubuntu
// aiserver2 ansible_host=10.0.0.6 ansible_user=ubuntu ansible_port=2222

use std::{
    fmt::{self, Display},
    fs,
    net::IpAddr,
    path::Path,
};

use itertools::Itertools;

use crate::error::InventoryError;

/// Connection settings shared by every host generated for a group.
#[derive(Debug, Clone)]
pub struct HostTemplate {
    pub host_prefix: String,
    pub ansible_user: String,
    pub ansible_port: Option<u16>,
}

impl HostTemplate {
    /// Hosts are numbered from 1, so the first host is `<prefix>1`.
    pub fn host(&self, index: usize, address: IpAddr) -> InventoryHost {
        InventoryHost {
            name: format!("{}{}", self.host_prefix, index + 1),
            ansible_host: address,
            ansible_user: self.ansible_user.clone(),
            ansible_port: self.ansible_port,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryHost {
    pub name: String,
    pub ansible_host: IpAddr,
    pub ansible_user: String,
    pub ansible_port: Option<u16>,
}

impl Display for InventoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ansible_host={} ansible_user={}",
            self.name, self.ansible_host, self.ansible_user
        )?;

        if let Some(port) = self.ansible_port {
            write!(f, " ansible_port={port}")?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryGroup {
    pub name: String,
    pub hosts: Vec<InventoryHost>,
}

impl Display for InventoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.name)?;
        for host in &self.hosts {
            writeln!(f, "{host}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsibleInventory {
    pub groups: Vec<InventoryGroup>,
}

impl AnsibleInventory {
    /// Builds a single-group inventory with one host per address.
    pub fn for_instances(
        group: &str,
        template: &HostTemplate,
        addresses: &[IpAddr],
    ) -> Result<Self, InventoryError> {
        validate_name("group name", group)?;
        validate_name("host prefix", &template.host_prefix)?;
        validate_user(&template.ansible_user)?;

        let hosts = addresses
            .iter()
            .enumerate()
            .map(|(index, address)| template.host(index, *address))
            .collect();

        Ok(Self {
            groups: vec![InventoryGroup {
                name: group.to_string(),
                hosts,
            }],
        })
    }

    /// Renders the inventory in Ansible's INI format. Groups are separated by a blank line.
    pub fn to_ini(&self) -> String {
        self.groups.iter().join("\n")
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), InventoryError> {
        let path = path.as_ref();

        fs::write(path, self.to_ini()).map_err(|source| InventoryError::Io {
            path: path.to_owned(),
            source,
        })
    }
}

fn validate_name(kind: &'static str, value: &str) -> Result<(), InventoryError> {
    let has_illegal_character = value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '=' | '[' | ']'));

    if value.is_empty() || has_illegal_character {
        return Err(InventoryError::InvalidName {
            kind,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Users only need to survive being a `key=value` pair on a whitespace separated host line.
fn validate_user(user: &str) -> Result<(), InventoryError> {
    if user.is_empty() || user.chars().any(char::is_whitespace) {
        return Err(InventoryError::InvalidUser(user.to_string()));
    }

    Ok(())
}
