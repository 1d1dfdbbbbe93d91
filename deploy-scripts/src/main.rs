use clap::Parser;
use deploy_scripts::{
    cli::Cli,
    errors::ScriptError,
    utils::{load_signer, setup_client},
};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        deployer,
        rpc_url,
        deployments_path,
        command,
    } = Cli::parse();

    tracing_subscriber::fmt().pretty().init();

    let signer = load_signer(&deployer)?;
    let client = setup_client(signer, &rpc_url)?;

    command.run(client, &deployments_path).await
}
