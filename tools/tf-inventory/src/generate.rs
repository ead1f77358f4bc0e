use crate::{
    ansible::AnsibleInventory, cli::Cli, error::InventoryError, terraform::TerraformOutputs,
};

/// Reads the Terraform outputs and builds the inventory without touching the output file.
pub fn generate_inventory(cli: &Cli) -> Result<AnsibleInventory, InventoryError> {
    tracing::info!(
        "Reading Terraform outputs from {}",
        cli.terraform_output.display()
    );
    let outputs = TerraformOutputs::load(&cli.terraform_output)?;

    // Only the first instance is used unless every host is requested
    let limit = (!cli.all_hosts).then_some(1);
    let addresses = outputs.instance_addresses(&cli.output_name, limit)?;

    tracing::info!(
        "Found {} address(es) in '{}': {:?}",
        addresses.len(),
        cli.output_name,
        addresses
    );

    AnsibleInventory::for_instances(&cli.group, &cli.host_template(), &addresses)
}

pub fn run(cli: &Cli) -> Result<(), InventoryError> {
    let inventory = generate_inventory(cli)?;

    if cli.dry_run {
        print!("{}", inventory.to_ini());
        return Ok(());
    }

    inventory.write_to(&cli.output)?;
    tracing::info!("Wrote inventory to {}", cli.output.display());

    Ok(())
}
