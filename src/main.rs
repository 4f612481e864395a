//! GK: project latitude/longitude pairs onto the 6° Gauss-Krüger plane.
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{bail, Context};
use clap::Parser;
use gausskruger::{Datum, LatLon, PlanarPoint};
use log::{debug, info, warn};

/// Reads whitespace separated "latitude longitude" pairs (decimal degrees)
/// and writes one projected "x y" line per pair. Text after a '#' is
/// ignored.
#[derive(Parser, Debug)]
#[clap(name = "gk")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Reference datum: WGS84 or CGCS2000
    #[clap(short, long, default_value_t = Datum::WGS84)]
    datum: Datum,

    /// Round input coordinates to single precision before projecting
    #[clap(long)]
    single: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    /// The files to operate on, stdin if none are given
    args: Vec<PathBuf>,
}

#[derive(Debug, Default)]
struct Tally {
    records: usize,
    failed: usize,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut tally = Tally::default();

    if options.args.is_empty() {
        process("<stdin>", io::stdin().lock(), &options, &mut out, &mut tally)?;
    } else {
        for path in &options.args {
            let file = File::open(path)
                .with_context(|| format!("Cannot open {}", path.display()))?;
            let source = path.display().to_string();
            process(&source, BufReader::new(file), &options, &mut out, &mut tally)?;
        }
    }
    out.flush()?;

    info!("{} record(s) read, {} failed", tally.records, tally.failed);
    if tally.failed > 0 {
        bail!("{} of {} record(s) could not be projected", tally.failed, tally.records);
    }
    Ok(())
}

/// Projects the numbers of `input` two at a time, however they are spread
/// over lines. Bad pairs, and a latitude left without a longitude at the
/// end, are logged and counted, and do not stop the run.
fn process<R, W>(source: &str, input: R, options: &Cli, out: &mut W, tally: &mut Tally) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    // Line number and text of a latitude still waiting for its longitude
    let mut pending: Option<(usize, String)> = None;

    for (index, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("Cannot read {source}"))?;
        let content = line.split('#').next().unwrap_or_default();

        for field in content.split_whitespace() {
            let Some((line_number, lat)) = pending.take() else {
                pending = Some((index + 1, field.to_string()));
                continue;
            };

            tally.records += 1;
            match project_record(&lat, field, options) {
                Ok(point) => writeln!(out, "{point}")?,
                Err(err) => {
                    tally.failed += 1;
                    warn!("{source}:{line_number}: {err}");
                }
            }
        }
    }

    if let Some((line_number, lat)) = pending {
        tally.records += 1;
        tally.failed += 1;
        warn!("{source}:{line_number}: latitude \"{lat}\" has no longitude");
    }
    Ok(())
}

fn project_record(lat: &str, lon: &str, options: &Cli) -> Result<PlanarPoint, gausskruger::Error> {
    let mut lat = parse_field("latitude", lat)?;
    let mut lon = parse_field("longitude", lon)?;
    if options.single {
        lat = single(lat);
        lon = single(lon);
    }
    LatLon::create(lat, lon)?.to_gauss(options.datum)
}

fn parse_field(name: &str, field: &str) -> Result<f64, gausskruger::Error> {
    field
        .parse()
        .map_err(|_| gausskruger::Error::InvalidCoord(format!("Invalid {name} \"{field}\"")))
}

#[allow(clippy::cast_possible_truncation)]
fn single(value: f64) -> f64 {
    f64::from(value as f32)
}
