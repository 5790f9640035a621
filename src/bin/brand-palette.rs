use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use brand_palette::{
    BrandRecord, ExtractionOptions, GeneratedPalettes, Locale, assign_roles, extract_colors,
    generate_palettes, open_image,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extract brand colors from images and generate social media palettes.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Language for color names, labels and descriptions
    #[arg(short, long, value_enum, default_value_t = LocaleArg::It, global = true)]
    locale: LocaleArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the dominant colors of each image
    Extract {
        #[command(flatten)]
        extraction: ExtractionArgs,
    },
    /// Suggest primary, secondary and accent colors from reference images
    Suggest {
        #[command(flatten)]
        extraction: ExtractionArgs,

        /// Client name for the printed brand record
        #[arg(long, default_value = "Nome Cliente")]
        client: String,
    },
    /// Generate the palette templates for a brand
    Generate {
        /// Brand record JSON file
        #[arg(short, long, conflicts_with = "demo")]
        brand: Option<PathBuf>,

        /// Use the built-in demo brand
        #[arg(long)]
        demo: bool,

        /// Write one JSON file per palette plus the swatch list into this directory
        #[arg(short = 'd', long)]
        out_dir: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct ExtractionArgs {
    /// One or more input image paths
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Maximum number of colors per image
    #[arg(short = 'k', long, default_value_t = 8)]
    count: usize,

    /// Longest side images are downscaled to before sampling
    #[arg(short = 's', long, default_value_t = 150)]
    max_dimension: u32,
}

impl ExtractionArgs {
    fn options(&self) -> ExtractionOptions {
        ExtractionOptions::default()
            .with_count(self.count)
            .with_max_dimension(self.max_dimension)
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LocaleArg {
    It,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::It => Locale::Italian,
            LocaleArg::En => Locale::English,
        }
    }
}

#[derive(Serialize)]
struct ImageColors {
    path: PathBuf,
    colors: Vec<brand_palette::SampledColor>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let locale = Locale::from(args.locale);

    match args.command {
        Command::Extract { extraction } => {
            let report = extract_all(&extraction)?;
            print_json(&report)
        }
        Command::Suggest { extraction, client } => {
            let report = extract_all(&extraction)?;
            let per_image: Vec<_> = report.into_iter().map(|r| r.colors).collect();
            let Some(suggestion) = assign_roles(&per_image, locale) else {
                bail!("not enough chromatic colors in the reference images to suggest roles");
            };
            let mut brand = BrandRecord::new(client);
            brand.apply_suggestion(suggestion);
            print_json(&brand)
        }
        Command::Generate {
            brand,
            demo,
            out_dir,
        } => {
            let brand = match (brand, demo) {
                (Some(path), _) => load_brand(&path)?,
                (None, true) => BrandRecord::demo(),
                (None, false) => bail!("pass --brand <file> or --demo"),
            };
            let generated = generate_palettes(&brand, locale);
            if generated.is_empty() {
                bail!("brand record {:?} is missing a role color", brand.client_name);
            }
            match out_dir {
                Some(dir) => write_exports(&dir, &brand, &generated),
                None => print_json(&generated),
            }
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn extract_all(extraction: &ExtractionArgs) -> Result<Vec<ImageColors>> {
    let options = extraction.options();
    extraction
        .inputs
        .iter()
        .map(|path| {
            let image = open_image(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let colors = extract_colors(&image, &options);
            info!(path = %path.display(), colors = colors.len(), "extracted colors");
            Ok(ImageColors {
                path: path.clone(),
                colors,
            })
        })
        .collect()
}

fn load_brand(path: &Path) -> Result<BrandRecord> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read brand record {}", path.display()))?;
    BrandRecord::from_json(&json)
        .with_context(|| format!("invalid brand record {}", path.display()))
}

fn write_exports(dir: &Path, brand: &BrandRecord, generated: &GeneratedPalettes) -> Result<()> {
    fs::create_dir_all(dir)?;

    for palette in &generated.palettes {
        let out_path = dir.join(format!("{}.json", palette.export_file_name(&brand.client_name)));
        fs::write(&out_path, serde_json::to_string_pretty(palette)?)?;
        println!("Saved → {}", out_path.display());
    }

    let swatch_path = dir.join(format!(
        "{}.json",
        GeneratedPalettes::swatch_file_name(&brand.client_name)
    ));
    fs::write(&swatch_path, serde_json::to_string_pretty(&generated.swatches)?)?;
    println!("Saved → {}", swatch_path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
