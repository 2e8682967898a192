use polar_tablegen::emit::{write_source, EmitOptions};
use polar_tablegen::image::io::load_rgb_image;
use std::env;
use std::io::{self, Write};
use std::path::Path;

const DEFAULT_INPUT: &str = "colormap.png";

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let filename = env::args().nth(1).unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let img = load_rgb_image(Path::new(&filename))?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_source(&mut out, &img, &EmitOptions::default())
        .and_then(|()| out.flush())
        .map_err(|e| format!("Failed to write generated source: {e}"))
}
