#[cfg(feature = "debug")]
extern crate chrono;
#[cfg(feature = "debug")]
extern crate fern;
#[cfg(feature = "debug")]
#[macro_use]
extern crate log;
extern crate spheres;

use std::process;

use spheres::interactor;

fn main() {
    #[cfg(feature = "debug")] init_logging();
    if let Err(err) = interactor::run() {
        eprintln!("spheres: {}", err);
        process::exit(1);
    }
}

#[cfg(feature = "debug")]
fn init_logging() {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {} {} {}",
                chrono::Local::now().format("%H:%M:%S%.6f"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply()
        .expect("logging initialization failed");
    debug!("logging to stderr");
}
