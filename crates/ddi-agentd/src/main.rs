//! DDI Agent Daemon
//!
//! Device-side deployment agent: polls a hawkBit-DDI-style control plane
//! for pending deployments, downloads the artifact when one is assigned,
//! and reports the outcome back.

use std::time::Duration;

use anyhow::Context;
use clap::{Arg, Command};
use ddi_agent::{AgentConfig, PollingAgent, shutdown_channel};
use tracing::info;

fn main() -> anyhow::Result<()> {
    smol::block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let matches = Command::new("ddi-agentd")
        .version("0.1.0")
        .about("Device-side deployment agent polling a hawkBit-style control plane")
        .arg(
            Arg::new("server")
                .long("server")
                .short('s')
                .value_name("URL")
                .help("Base URL of the control plane")
                .default_value("http://localhost:8000"),
        )
        .arg(
            Arg::new("controller-id")
                .long("controller-id")
                .short('c')
                .value_name("ID")
                .help("Controller identifier this device presents")
                .default_value("device001"),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .short('i')
                .value_name("SECONDS")
                .help("Seconds to wait between polling cycles")
                .default_value("10"),
        )
        .arg(
            Arg::new("download-path")
                .long("download-path")
                .short('o')
                .value_name("PATH")
                .help("Where to store the downloaded artifact")
                .default_value("downloaded_firmware.bin"),
        )
        .get_matches();

    let server = matches.get_one::<String>("server").unwrap();
    let controller_id = matches.get_one::<String>("controller-id").unwrap();
    let interval: u64 = matches
        .get_one::<String>("interval")
        .unwrap()
        .parse()
        .context("--interval must be a number of seconds")?;
    let download_path = matches.get_one::<String>("download-path").unwrap();

    let config = AgentConfig::new(server, controller_id)
        .with_poll_interval(Duration::from_secs(interval))
        .with_download_path(download_path);

    info!(
        "Starting DDI agent for controller {} against {}",
        config.controller_id, config.server_url
    );

    let agent = PollingAgent::new(config)?;

    // The loop runs until the process is terminated; holding the handle
    // keeps the signal untriggered for the lifetime of the daemon.
    let (_shutdown, signal) = shutdown_channel();
    agent.run(signal).await;

    Ok(())
}
