use std::path::PathBuf;

use clap::Parser;
use iyasb::install::{ConfigStatus, Injection, Installer, Payload, SYNC_REMINDER};
use pretty_hex::pretty_hex;

static PAYLOAD: Payload<'static> = Payload::new(
    include_bytes!(concat!(env!("OUT_DIR"), "/bootsector.bin")),
    include_bytes!(concat!(env!("OUT_DIR"), "/stage2.bin")),
);

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    #[clap(short, long)]
    quiet: bool,
    #[clap(short, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// FAT32 volume, either an image file or a block device
    image: PathBuf,
    /// Directory the volume is mounted on
    root: PathBuf,
}

fn main() {
    let args = Args::parse();
    let level = match (args.quiet, args.verbosity) {
        (true, _) => log::LevelFilter::Off,
        (_, 0) => log::LevelFilter::Info,
        (_, 1) => log::LevelFilter::Debug,
        (_, _) => log::LevelFilter::Trace,
    };
    log::set_max_level(level);
    env_logger::builder().filter(None, level).target(env_logger::Target::Stdout).init();

    let installer = Installer::new(PAYLOAD);
    if log::log_enabled!(log::Level::Trace) {
        let loader = installer.payload().loader().to_bytes();
        log::trace!("Boot sector image\n{}", pretty_hex(&loader));
    }

    let report = match installer.install(&args.image, &args.root) {
        Ok(report) => report,
        Err(error) => {
            eprintln!("{:?}", error);
            std::process::exit(1);
        }
    };
    if report.injection == Injection::Unchanged {
        log::info!("{} already carried this boot code", args.image.display());
    }
    if report.config == ConfigStatus::AlreadyExists {
        log::info!("Existing configuration left untouched");
    }

    println!("Done!");
    println!("{}", SYNC_REMINDER);
}
