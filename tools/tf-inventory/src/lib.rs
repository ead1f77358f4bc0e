pub mod ansible;
pub mod cli;
pub mod error;
pub mod generate;
pub mod terraform;

/// Where the provisioning pipeline drops `terraform output -json` for the AI stack.
pub const DEFAULT_TERRAFORM_OUTPUT_PATH: &str =
    "/home/ubuntu/jenkins/howabout/terraform-project/ai/terraform_output.json";
