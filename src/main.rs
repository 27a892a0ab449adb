//! Colorpath - terminal viewer for a color-varying trajectory.

use anyhow::Result;
use clap::Parser;
use colorpath::app::App;
use colorpath::chart::{ChartData, ChartOptions, TrajectoryChart};
use colorpath::colormap::{ColorPalette, Colormap, DEFAULT_COLORMAP_SIZE};
use colorpath::config::{ChartDefaults, DEFAULT_LINE_WIDTH};
use colorpath::surface::{CanvasSurface, PropertyMode};
use colorpath::ui;
use colorpath::walk::{self, WalkParams};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "colorpath")]
#[command(about = "Draw a bounded random walk as a color-varying line", long_about = None)]
struct Args {
    /// Seed for the random walk
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of walk points
    #[arg(long, default_value_t = 20_000)]
    steps: usize,

    /// Half-width of the reflecting boundary
    #[arg(long, default_value_t = 100.0)]
    half_width: f64,

    /// Velocity damping per step, in [0, 1]
    #[arg(long, default_value_t = 0.7)]
    damping: f64,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Chart subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Colorbar label
    #[arg(long, default_value = "heat")]
    colorbar_label: String,

    /// Line width in points
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    line_width: f64,

    /// Colormap preset (viridis, plasma, rainbow, blue-red)
    #[arg(long)]
    palette: Option<String>,

    /// Fixed color limits
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    clim: Option<Vec<f64>>,

    /// Color limits mode (auto or manual)
    #[arg(long)]
    limits_mode: Option<String>,

    /// Show the colorbar
    #[arg(long)]
    colorbar: bool,

    /// Color by point index instead of the heat signal
    #[arg(long)]
    index_color: bool,

    /// Print the chart summary and exit without starting the viewer
    #[arg(long)]
    summary: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Colorpath");
    }

    let params = WalkParams {
        steps: args.steps,
        half_width: args.half_width,
        damping: args.damping,
        ..WalkParams::default()
    };
    let walk = walk::generate_seeded(&params, args.seed)?;

    let defaults = ChartDefaults::default();
    let options = chart_options(&args)?;
    let data = if args.index_color {
        ChartData::xy(walk.x.clone(), walk.y.clone())
    } else {
        ChartData::xyc(walk.x.clone(), walk.y.clone(), walk.c.clone())
    };
    let chart = TrajectoryChart::builder()
        .parent(CanvasSurface::new(defaults.colormap.clone()))
        .data(data)
        .options(options)
        .defaults(defaults.clone())
        .build()?;

    if args.summary {
        print!("{}", chart);
        println!(
            "Walk: {} points, hot spot ({:.1}, {:.1})",
            walk.len(),
            walk.hotspot[0],
            walk.hotspot[1]
        );
        tracing::info!("Colorpath exited");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(chart, walk, params, args.seed, defaults);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Colorpath exited");
    }

    Ok(())
}

fn chart_options(args: &Args) -> Result<ChartOptions> {
    let title = args
        .title
        .clone()
        .unwrap_or_else(|| format!("Random walk, seed {}", args.seed));
    let subtitle = args
        .subtitle
        .clone()
        .unwrap_or_else(|| format!("{} steps within ±{}", args.steps, args.half_width));

    let colormap = args
        .palette
        .as_deref()
        .map(|name| name.parse::<ColorPalette>())
        .transpose()?
        .map(|palette| Colormap::from_palette(palette, DEFAULT_COLORMAP_SIZE));

    let color_limits_mode = args
        .limits_mode
        .as_deref()
        .map(str::parse::<PropertyMode>)
        .transpose()?;

    Ok(ChartOptions {
        title: Some(title),
        subtitle: Some(subtitle),
        colorbar_label: Some(args.colorbar_label.clone()),
        line_width: Some(args.line_width),
        colormap,
        color_limits: args.clim.as_ref().map(|v| (v[0], v[1])),
        color_limits_mode,
        colorbar_visible: Some(args.colorbar),
    })
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "Terminal resized");
                    app.rebuild_surface();
                }
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match (key.modifiers, key.code) {
                        // Quit
                        (KeyModifiers::NONE, KeyCode::Char('q'))
                        | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                        (KeyModifiers::NONE, KeyCode::Char('n')) => app.new_walk(),
                        (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_palette(),
                        (KeyModifiers::NONE, KeyCode::Char('b')) => app.toggle_colorbar(),
                        (KeyModifiers::NONE, KeyCode::Char('i')) => app.toggle_index_coloring(),
                        (KeyModifiers::NONE, KeyCode::Char('m')) => app.toggle_limits_mode(),
                        (KeyModifiers::NONE, KeyCode::Char('r')) => app.rebuild_surface(),
                        (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_summary(),

                        // Line width
                        (_, KeyCode::Char('+')) | (_, KeyCode::Char('=')) => {
                            app.adjust_line_width(0.5);
                        }
                        (_, KeyCode::Char('-')) => {
                            app.adjust_line_width(-0.5);
                        }

                        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                        _ => {}
                    }
                }
                _ => {}
            }
        }
    }
}
