use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use linkforge::{config::LinkCatalog, AppState, ParamValue, Parameters};
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND: &str = "127.0.0.1:8000";

fn cli() -> Command {
    Command::new("linkforge")
        .about("Expand URI templates into hypermedia links")
        .subcommand_required(true)
        .subcommand(
            Command::new("serve")
                .about("Serve the link catalog over HTTP")
                .arg(
                    Arg::new("links")
                        .short('l')
                        .long("links")
                        .value_name("LINKS")
                        .help("Path to a YAML file containing link relations"),
                )
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .value_name("ADDR")
                        .help("Address to listen on")
                        .default_value(DEFAULT_BIND),
                ),
        )
        .subcommand(
            Command::new("expand")
                .about("Expand a template with positional values or named parameters")
                .arg(Arg::new("template").value_name("TEMPLATE").required(true))
                .arg(
                    Arg::new("values")
                        .value_name("VALUE")
                        .num_args(0..)
                        .action(ArgAction::Append)
                        .conflicts_with("param"),
                )
                .arg(
                    Arg::new("param")
                        .short('p')
                        .long("param")
                        .value_name("NAME=VALUE")
                        .action(ArgAction::Append)
                        .help("Named parameter, repeat a name to pass a collection"),
                )
                .arg(
                    Arg::new("composite")
                        .long("composite")
                        .action(ArgAction::SetTrue)
                        .help("Render collections as repeated name=value pairs"),
                ),
        )
        .subcommand(
            Command::new("strip")
                .about("Remove page, size and sort query parameters from a URI")
                .arg(Arg::new("uri").value_name("URI").required(true)),
        )
}

async fn serve(args: &ArgMatches) -> Result<()> {
    let catalog = LinkCatalog::load(args.get_one::<String>("links").map(String::as_str))?;
    let bind = args
        .get_one::<String>("bind")
        .map(String::as_str)
        .unwrap_or(DEFAULT_BIND);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Could not bind to {}", bind))?;
    tracing::info!(address = bind, "link service listening");

    axum::serve(listener, linkforge::create_router(AppState::new(catalog))).await?;
    Ok(())
}

fn expand(args: &ArgMatches) -> Result<String> {
    let template = args
        .get_one::<String>("template")
        .context("A template is required")?;

    let named: Vec<&String> = args
        .get_many::<String>("param")
        .map(|params| params.collect())
        .unwrap_or_default();

    if named.is_empty() {
        let values: Vec<ParamValue> = args
            .get_many::<String>("values")
            .map(|values| values.map(ParamValue::from).collect())
            .unwrap_or_default();
        return Ok(linkforge::expand(template, &values)?);
    }

    let mut parameters = Parameters::new();
    for param in named {
        let (name, value) = param
            .split_once('=')
            .with_context(|| format!("Invalid parameter '{}', expected NAME=VALUE", param))?;
        parameters.append(name, value);
    }
    Ok(linkforge::expand_named_with(
        template,
        &parameters,
        args.get_flag("composite"),
    )?)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkforge=info,tower_http=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("serve", args)) => serve(args).await,
        Some(("expand", args)) => {
            println!("{}", expand(args)?);
            Ok(())
        }
        Some(("strip", args)) => {
            let uri = args.get_one::<String>("uri").context("A URI is required")?;
            println!("{}", linkforge::strip_paging_parameters(uri));
            Ok(())
        }
        _ => unreachable!("a subcommand is required"),
    }
}
