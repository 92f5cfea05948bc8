use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ssynth_cli::report::{constraints_table, kinds_json, kinds_table, parameters_table};
use ssynth_codec::{Codec, CodecOptions};
use ssynth_model::default_catalogue;

use crate::cli::{InspectArgs, KindsArgs, WrapArgs};

pub fn run_kinds(args: &KindsArgs) -> Result<()> {
    let catalogue = default_catalogue();
    if let Some(name) = &args.kind {
        let schema = catalogue.schema(name).with_context(|| {
            let known: Vec<&str> = catalogue.kind_names().collect();
            format!("unknown kind '{name}' (known: {})", known.join(", "))
        })?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(schema)?);
        } else {
            println!("{}", parameters_table(schema));
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&kinds_json(catalogue))?);
    } else {
        println!("{}", kinds_table(catalogue));
    }
    Ok(())
}

pub fn run_inspect(args: &InspectArgs, options: CodecOptions) -> Result<()> {
    let span = info_span!("inspect", payload = %args.payload.display());
    let _guard = span.enter();

    let codec = Codec::with_options(options);
    let text = read_input(&args.payload)?;
    let constraints = codec
        .decode(&text)
        .with_context(|| format!("decode {}", args.payload.display()))?;
    info!(
        columns = constraints.len(),
        version = %codec.options().library_version,
        "decoded payload"
    );

    if args.json {
        let envelope = codec.encode_to_value(&constraints)?;
        println!("{}", serde_json::to_string_pretty(&envelope)?);
    } else {
        println!("{}", constraints_table(&constraints));
    }
    Ok(())
}

pub fn run_wrap(args: &WrapArgs, options: CodecOptions) -> Result<()> {
    let span = info_span!("wrap", constraints = %args.constraints.display());
    let _guard = span.enter();

    let codec = Codec::with_options(options.with_pretty(args.pretty));
    let text = read_input(&args.constraints)?;
    let constraints = codec
        .read_constraints(&text)
        .with_context(|| format!("read constraints from {}", args.constraints.display()))?;
    let wire = codec.encode(&constraints).context("encode envelope")?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{wire}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(
                columns = constraints.len(),
                path = %path.display(),
                "wrote envelope"
            );
        }
        None => println!("{wire}"),
    }
    Ok(())
}

/// Whole file, or stdin when `path` is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        io::read_to_string(io::stdin()).context("read stdin")
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }
}
