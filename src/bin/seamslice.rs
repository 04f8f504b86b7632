// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamslice::dump::energy_to_image;
use seamslice::{calculate_energy, grayscale, SeamCarver};

extern crate clap;
extern crate image;

use clap::{value_t, App, Arg, ArgMatches};
use failure::Error;
use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView, ImageBuffer, Pixel};
use log::{info, LevelFilter};

struct Options<'a> {
    scale: f64,
    output: &'a str,
    seams: &'a str,
    energy: Option<&'a str>,
}

fn log_level(verbosity: u64) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// Oversized inputs are shrunk so that their longer side is `max_size`.
fn fit_within(image: DynamicImage, max_size: u32) -> DynamicImage {
    let (width, height) = image.dimensions();
    let longest = width.max(height);
    if max_size == 0 || longest <= max_size {
        return image;
    }
    let ratio = f64::from(max_size) / f64::from(longest);
    let (nw, nh) = (
        ((f64::from(width) * ratio) as u32).max(1),
        ((f64::from(height) * ratio) as u32).max(1),
    );
    info!("resizing {}x{} to {}x{}", width, height, nw, nh);
    image.resize_exact(nw, nh, FilterType::Triangle)
}

fn carve_and_save<P>(image: ImageBuffer<P, Vec<u8>>, options: &Options) -> Result<(), Error>
where
    P: Pixel<Subpixel = u8> + 'static,
    DynamicImage: From<ImageBuffer<P, Vec<u8>>>,
{
    if let Some(path) = options.energy {
        energy_to_image(&calculate_energy(&grayscale(&image))).save(path)?;
    }

    let (resized, seams) = SeamCarver::new(&image).carve(options.scale)?;
    DynamicImage::from(resized).save(options.output)?;
    DynamicImage::from(seams).save(options.seams)?;
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let options = Options {
        scale: value_t!(matches, "scale", f64)?,
        output: matches.value_of("output").unwrap_or("output_resized.png"),
        seams: matches.value_of("seams").unwrap_or("output_seams.png"),
        energy: matches.value_of("energy"),
    };
    let max_size = value_t!(matches, "max-size", u32)?;
    let input = matches.value_of("input").unwrap_or_default();

    let image = image::open(input)?;
    info!("read {} ({}x{})", input, image.width(), image.height());
    let image = fit_within(image, max_size);

    match image.color() {
        ColorType::L8 | ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            carve_and_save(image.to_luma8(), &options)
        }
        _ => carve_and_save(image.to_rgb8(), &options),
    }
}

fn main() -> Result<(), Error> {
    let matches = App::new("seamslice")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by removing its least interesting seams")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("scale")
                .short("c")
                .long("scale")
                .takes_value(true)
                .default_value("0.5")
                .help("Fraction of the width to keep"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("output_resized.png")
                .help("Where to write the carved image"),
        )
        .arg(
            Arg::with_name("seams")
                .short("s")
                .long("seams")
                .takes_value(true)
                .default_value("output_seams.png")
                .help("Where to write the input with removed seams marked"),
        )
        .arg(
            Arg::with_name("max-size")
                .short("m")
                .long("max-size")
                .takes_value(true)
                .default_value("800")
                .help("Shrink inputs whose longer side exceeds this first; 0 disables"),
        )
        .arg(
            Arg::with_name("energy")
                .short("e")
                .long("energy")
                .takes_value(true)
                .help("Also write the energy map of the input"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    env_logger::Builder::new()
        .filter_level(log_level(matches.occurrences_of("verbose")))
        .format_timestamp(None)
        .init();

    run(&matches)
}
