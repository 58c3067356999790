use colored::*;
use efa_deploy_common::config::Config;
use efa_deploy_common::tpvm::TpvmAddresses;
use efa_deploy_core::status::{StatusService, TpvmReport};
use efa_deploy_core::system::SwitchCli;
use tracing::warn;

use crate::mprint;
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use crate::terminal::{colors, reporter::TerminalReporter};

pub async fn status(cfg: &Config) -> anyhow::Result<()> {
    let service = StatusService::new(
        Box::new(SwitchCli::new(&cfg.switch_cli)),
        Box::new(TerminalReporter::new(cfg.quiet)),
    );

    let report: TpvmReport = service.inspect().await?;
    print_report(&report, cfg);
    Ok(())
}

fn yes_no(value: bool) -> ColoredString {
    if value {
        "yes".color(colors::POSITIVE).bold()
    } else {
        "no".color(colors::NEGATIVE).bold()
    }
}

fn print_report(report: &TpvmReport, cfg: &Config) {
    print::header("tpvm status", cfg.quiet);
    GLOBAL_KEY_WIDTH.set(9);

    print::aligned_line("Installed", yes_no(report.installed));
    print::aligned_line("Running", yes_no(report.running));

    match &report.addresses {
        Some(Ok(addresses)) => print_addresses(addresses),
        Some(Err(err)) => warn!("Could not read TPVM addresses: {err}"),
        None => {}
    }

    if cfg.quiet == 0 {
        mprint!();
        print::end_of_program();
    }
}

fn print_addresses(addresses: &TpvmAddresses) {
    if addresses.is_empty() {
        print::aligned_line("Address", "none assigned");
        return;
    }

    for ip in &addresses.ipv4 {
        print::aligned_line("IPv4", ip.color(colors::IPV4_ADDR));
    }
    for ip in &addresses.ipv6 {
        print::aligned_line("IPv6", ip.color(colors::IPV6_ADDR));
    }
    if let Some(preferred) = addresses.preferred() {
        print::aligned_line("Preferred", preferred.color(colors::ACCENT).bold());
    }
}
