use chart_theme::api::{ThemeEngine, demo_charts};
use chart_theme::render::{HeadlessRenderHost, RenderHost};
use chart_theme::telemetry::init_default_tracing;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandKind {
    List,
    Render { theme: Option<String>, chart: Option<String> },
}

const USAGE: &str = "usage: theme_gallery [--list] [--theme <name>] [--chart <pie|bar|line|radar>]";

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut engine = ThemeEngine::new();
    engine
        .register_preset_themes()
        .map_err(|err| format!("failed to register preset themes: {err}"))?;

    match parse_args()? {
        CommandKind::List => {
            for name in engine.list_themes_active_first() {
                let marker = if name == engine.active_theme_name() { "*" } else { " " };
                println!("{marker} {name}");
            }
            Ok(())
        }
        CommandKind::Render { theme, chart } => {
            if let Some(theme) = theme.as_deref() {
                engine.set_active_theme(theme).map_err(|err| err.to_string())?;
            }

            let mut host = HeadlessRenderHost::new();
            let mut rendered = Map::new();
            for (name, config) in demo_charts() {
                if chart.as_deref().is_some_and(|wanted| wanted != name) {
                    continue;
                }
                let themed = engine
                    .apply_theme(&config, None)
                    .map_err(|err| format!("failed to theme `{name}`: {err}"))?;
                host.render(&themed).map_err(|err| err.to_string())?;
                let json = serde_json::to_value(&themed)
                    .map_err(|err| format!("failed to serialize `{name}`: {err}"))?;
                rendered.insert(name.to_owned(), json);
            }
            if rendered.is_empty() {
                return Err(format!("no demo chart matched\n{USAGE}"));
            }

            let output = serde_json::json!({
                "theme": engine.active_theme_name(),
                "charts": Value::Object(rendered),
            });
            let text = serde_json::to_string_pretty(&output)
                .map_err(|err| format!("failed to serialize output: {err}"))?;
            println!("{text}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CommandKind, String> {
    let mut args = std::env::args().skip(1);
    let mut theme = None::<String>;
    let mut chart = None::<String>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--list" => return Ok(CommandKind::List),
            "--theme" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --theme".to_owned())?;
                theme = Some(value);
            }
            "--chart" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --chart".to_owned())?;
                chart = Some(value);
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CommandKind::Render { theme, chart })
}
