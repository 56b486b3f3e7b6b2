use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use edgeraster::colors::{RED, WHITE};
use edgeraster::{scenes, Engine, LineAlgorithm, Model, Result};

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Demo {
    /// Three colored segments on a 64x64 canvas
    Lines,
    /// Three sorted triangle outlines on a 250x250 canvas
    Triangles,
}

/// Rasterize demo scenes or OBJ wireframes to an image file.
#[derive(Parser, Debug)]
#[command(name = "edgeraster", version)]
struct Cli {
    /// OBJ model to draw as a wireframe instead of a demo scene
    #[arg(value_hint = clap::ValueHint::FilePath)]
    model: Option<PathBuf>,

    /// Built-in scene drawn when no model is given
    #[arg(long, value_enum, default_value_t = Demo::Lines)]
    demo: Demo,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "framebuffer.tga")]
    output: PathBuf,

    /// Canvas width for model renders; demo scenes have fixed sizes
    #[arg(long, default_value_t = scenes::MODEL_SIZE.0)]
    width: u32,

    /// Canvas height for model renders
    #[arg(long, default_value_t = scenes::MODEL_SIZE.1)]
    height: u32,

    /// Line algorithm: parametric, dda, float-error, bresenham or branchless.
    /// The triangles demo always uses bresenham
    #[arg(short, long, default_value_t = LineAlgorithm::Bresenham)]
    algorithm: LineAlgorithm,

    /// Skip marking model vertices in white
    #[arg(long)]
    no_vertices: bool,
}

fn render(cli: &Cli) -> Result<Engine> {
    let Some(path) = &cli.model else {
        log::info!("drawing the {:?} demo", cli.demo);
        return match cli.demo {
            Demo::Lines => scenes::lines(cli.algorithm),
            Demo::Triangles => scenes::triangles(),
        };
    };

    let model = Model::from_obj(path)?;
    log::info!(
        "loaded {}: {} vertices, {} faces",
        path.display(),
        model.nverts(),
        model.nfaces()
    );

    let mut engine = Engine::new(cli.width, cli.height)?;
    engine.set_line_algorithm(cli.algorithm);
    engine.draw_model_wireframe(&model, RED);
    if !cli.no_vertices {
        engine.plot_vertices(&model, WHITE);
    }
    Ok(engine)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = render(&cli).and_then(|engine| engine.save(&cli.output));
    match result {
        Ok(()) => {
            log::info!("wrote {}", cli.output.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        },
    }
}
