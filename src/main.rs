#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::process::ExitCode;

#[cfg(target_os = "windows")]
fn main() -> ExitCode {
    use tabdeck::{DialogConfig, DialogInterface};

    env_logger::init();

    let result = DialogInterface::new(DialogConfig::default()).and_then(|ui| ui.run_modal());
    match result {
        Ok(command) => {
            log::info!("Dialog closed with command {}", command.raw());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Tab dialog failed: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_os = "windows"))]
fn main() -> ExitCode {
    env_logger::init();
    log::error!("tabdeck needs the Win32 dialog and common-controls subsystems");
    eprintln!("tabdeck only runs on Windows");
    ExitCode::FAILURE
}
