use std::path::PathBuf;

use clap::Parser;

use crate::{ansible::HostTemplate, DEFAULT_TERRAFORM_OUTPUT_PATH};

/// Generate an Ansible inventory from the JSON produced by `terraform output -json`.
///
/// With no arguments the AI server's address is read from the provisioning
/// pipeline's Terraform output and written to `./inventory.ini`.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the Terraform output JSON file
    #[clap(long, env = "TERRAFORM_OUTPUT_PATH", default_value = DEFAULT_TERRAFORM_OUTPUT_PATH)]
    pub terraform_output: PathBuf,
    /// Where to write the inventory. Existing files are overwritten
    #[clap(long, env = "INVENTORY_PATH", default_value = "inventory.ini")]
    pub output: PathBuf,
    /// The Terraform output holding the instance IP addresses
    #[clap(long, env = "TERRAFORM_OUTPUT_NAME", default_value = "ai_instance_ip")]
    pub output_name: String,
    /// The inventory group the hosts are placed in
    #[clap(long, env = "INVENTORY_GROUP", default_value = "aiservers")]
    pub group: String,
    /// Host names are this prefix followed by a number starting at 1
    #[clap(long, env = "INVENTORY_HOST_PREFIX", default_value = "aiserver")]
    pub host_prefix: String,
    /// The SSH user Ansible connects as
    #[clap(long, env = "ANSIBLE_USER", default_value = "ubuntu")]
    pub ansible_user: String,
    /// The SSH port Ansible connects to, omitted from the inventory if not set
    #[clap(long, env = "ANSIBLE_PORT")]
    pub ansible_port: Option<u16>,
    /// Add every address in the output rather than only the first
    #[clap(long)]
    pub all_hosts: bool,
    /// Print the inventory to stdout instead of writing the file
    #[clap(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn host_template(&self) -> HostTemplate {
        HostTemplate {
            host_prefix: self.host_prefix.clone(),
            ansible_user: self.ansible_user.clone(),
            ansible_port: self.ansible_port,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn when_port_given_then_carried_into_template() {
        let cli = Cli::parse_from([
            "tf-inventory",
            "--ansible-port",
            "2222",
            "--ansible-user",
            "admin",
            "--host-prefix",
            "gpu",
        ]);

        let template = cli.host_template();
        assert_eq!(template.ansible_port, Some(2222));
        assert_eq!(template.ansible_user, "admin");
        assert_eq!(template.host_prefix, "gpu");
    }

    #[test]
    fn when_port_out_of_range_then_reject() {
        let result = Cli::try_parse_from(["tf-inventory", "--ansible-port", "70000"]);
        assert!(result.is_err());
    }
}
