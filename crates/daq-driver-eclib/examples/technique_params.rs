//! Load a technique parameter file and print the raw records.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p daq-driver-eclib --example technique_params -- ocv.toml
//! ```

use anyhow::Context;
use daq_driver_eclib::{EccParam, TechniqueConfig};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: technique_params <file.toml>")?;
    let config = TechniqueConfig::from_file(&path)?;

    if let Some(technique) = config.technique {
        println!("Technique: {} ({})", technique, technique.to_raw());
    }
    if let Some(hardware) = config.hardware {
        let raw = hardware.to_raw();
        let (conn, ground) = (raw.Conn, raw.Ground);
        println!("Hardware: Conn={} Ground={}", conn, ground);
    }

    let params = config.to_params()?;
    println!("{} parameter(s):", params.len());
    for raw in params.as_slice() {
        let param = EccParam::from_raw(raw)?;
        let (ty, val, idx) = (raw.ParamType, raw.ParamVal, raw.ParamIndex);
        println!(
            "  {:<24} type={} val=0x{:08x} index={}  ({:?})",
            param.label, ty, val, idx, param.value
        );
    }
    Ok(())
}
