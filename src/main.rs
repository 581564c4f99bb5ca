//! Entroware Keyboard Backlight CLI
//!
//! A command-line surface over the backlight controller. The controller,
//! codec and state machine live in the `entroware-keyboard` crate; this
//! binary is the attribute exposure layer: it parses input, wires up a
//! transport, initializes the controller and prints state.

use std::io::BufRead;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;

use entroware_keyboard::{
    InitialSettings, KeyboardController, Preset, Zone, PRESETS,
};
use entroware_wmi::{TraceWmi, WmiTransport};

mod cli;
mod config;
mod sim;

use cli::{Cli, Commands};
use config::Config;
use sim::SimulatedWmi;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("entroware_kb=info".parse().unwrap())
        .add_directive("entroware_keyboard=info".parse().unwrap());
    if cli.monitor {
        // TraceWmi logs each method call at debug
        filter = filter.add_directive("entroware_wmi=debug".parse().unwrap());
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = match &cli.config {
        Some(path) => Config::load(path)?.into_settings(),
        None => InitialSettings::default(),
    };

    let transport: Box<dyn WmiTransport> = if cli.monitor {
        Box::new(TraceWmi::wrap(SimulatedWmi::new(!cli.no_extra)))
    } else {
        Box::new(SimulatedWmi::new(!cli.no_extra))
    };

    let mut controller = KeyboardController::new(transport);
    controller.initialize(&settings)?;

    match cli.command {
        None | Some(Commands::Status) => print_status(&controller),

        Some(Commands::Presets) => {
            for (index, preset) in PRESETS.iter().enumerate() {
                println!("{index}  {:<8} #{:06X}", preset.name, preset.colour);
            }
        }

        Some(Commands::SetPower { state }) => {
            controller.set_power(state)?;
            print_status(&controller);
        }

        Some(Commands::SetColour { zone, colour }) => {
            controller.set_zone_colour(zone, colour)?;
            print_status(&controller);
        }

        Some(Commands::SetBrightness { level }) => {
            controller.set_brightness(level as u32)?;
            print_status(&controller);
        }

        Some(Commands::SetPreset { preset }) => {
            let index = resolve_preset(&preset)?;
            controller.set_preset(index)?;
            print_status(&controller);
        }

        Some(Commands::Events) => run_event_loop(&mut controller)?,
    }

    Ok(())
}

/// Resolve a preset argument given as an index or a name.
fn resolve_preset(arg: &str) -> Result<usize> {
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(index);
    }
    Preset::index_by_name(arg)
        .ok_or_else(|| anyhow!("unknown preset \"{arg}\": use an index (0-6) or a colour name"))
}

fn print_status<T: WmiTransport>(controller: &KeyboardController<T>) {
    let state = controller.state();
    println!("power:      {}", if state.power_on() { "on" } else { "off" });
    println!("brightness: {}", state.brightness());
    println!(
        "preset:     {} ({})",
        state.active_preset(),
        PRESETS[state.active_preset()].name
    );
    for zone in Zone::STANDARD {
        println!("{:<11} #{:06X}", format!("{zone}:"), state.zone_colour(zone).unwrap_or(0));
    }
    if state.extra_zone_supported() {
        println!(
            "extra:      #{:06X}",
            state.zone_colour(Zone::Extra).unwrap_or(0)
        );
    } else {
        println!("extra:      not supported");
    }
}

/// Dispatch hex event codes read from stdin, one per line.
///
/// Stands in for the kernel's WMI notify registration: each line plays the
/// role of one hardware notification.
fn run_event_loop<T: WmiTransport>(controller: &mut KeyboardController<T>) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let code = match u32::from_str_radix(hex, 16) {
            Ok(code) => code,
            Err(_) => {
                eprintln!("ignoring non-hex input: {trimmed}");
                continue;
            }
        };
        let event = controller.handle_event(code)?;
        info!("event {:#04x} -> {:?}", code, event);
        print_status(controller);
    }
    Ok(())
}
