#[cfg(test)]
#[path = "../../tests/unit/commands/group_test.rs"]
mod group_test;

use super::*;
use std::io::BufReader;
use std::sync::Arc;
use survey_cli::core::prelude::*;
use survey_cli::extensions::export::export_results;
use survey_cli::extensions::import::{filter_addresses, import_addresses, split_by_village};

const INPUT_ARG_NAME: &str = "INPUT";
const INPUT_FORMAT_ARG_NAME: &str = "input-format";
const OUT_FORMAT_ARG_NAME: &str = "format";
const DISTRICT_ARG_NAME: &str = "district";
const VILLAGE_ARG_NAME: &str = "village";
const TARGET_SIZE_ARG_NAME: &str = "target-size";
const MIN_SIZE_ARG_NAME: &str = "min-size";
const MAX_SIZE_ARG_NAME: &str = "max-size";
const TARGET_GROUPS_ARG_NAME: &str = "target-groups";
const STRATEGY_ARG_NAME: &str = "strategy";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_group_app() -> Command {
    Command::new("group")
        .about("Groups survey addresses into walkable canvassing routes, village by village")
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets input file with addresses").required(true).index(1))
        .arg(
            Arg::new(INPUT_FORMAT_ARG_NAME)
                .help("Specifies input type")
                .short('i')
                .long(INPUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(
            Arg::new(OUT_FORMAT_ARG_NAME)
                .help("Specifies output type")
                .short('f')
                .long(OUT_FORMAT_ARG_NAME)
                .required(false)
                .default_value("json")
                .value_parser(["csv", "json"]),
        )
        .arg(
            Arg::new(DISTRICT_ARG_NAME)
                .help("Keeps only addresses of the given district")
                .short('d')
                .long(DISTRICT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(VILLAGE_ARG_NAME)
                .help("Keeps only addresses of the given village")
                .short('v')
                .long(VILLAGE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TARGET_SIZE_ARG_NAME)
                .help("Specifies desired amount of addresses per group")
                .short('t')
                .long(TARGET_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MIN_SIZE_ARG_NAME)
                .help("Specifies minimum acceptable group size")
                .long(MIN_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_SIZE_ARG_NAME)
                .help("Specifies maximum acceptable group size")
                .long(MAX_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TARGET_GROUPS_ARG_NAME)
                .help("Specifies fixed amount of initial clusters instead of deriving it from target size")
                .short('g')
                .long(TARGET_GROUPS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Specifies clustering strategy")
                .short('s')
                .long(STRATEGY_ARG_NAME)
                .required(false)
                .value_parser(["centroid", "density", "sequential", "neighborhood"]),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to grouping configuration file in json format")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_group(matches: &ArgMatches) -> Result<(), String> {
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or_else(|| "input file is not set".to_string())?;
    let input_format = matches.get_one::<String>(INPUT_FORMAT_ARG_NAME).map(String::as_str).unwrap_or("csv");
    let out_format = matches.get_one::<String>(OUT_FORMAT_ARG_NAME).map(String::as_str).unwrap_or("json");
    let district = matches.get_one::<String>(DISTRICT_ARG_NAME).map(String::as_str);
    let village = matches.get_one::<String>(VILLAGE_ARG_NAME).map(String::as_str);

    let config = get_config(matches)?;
    let environment = get_environment(matches);

    let addresses = import_addresses(input_format, BufReader::new(open_file(input_path, "input")))
        .map_err(|err| format!("cannot import addresses: '{err}'"))?;

    let addresses = filter_addresses(addresses, district, village);
    if addresses.is_empty() {
        return Err("no addresses left to group after filtering".to_string());
    }

    let villages = split_by_village(addresses);
    let inputs = villages
        .iter()
        .map(|(district, village, addresses)| VillageInput {
            district: district.clone(),
            village: village.clone(),
            addresses: addresses.as_slice(),
        })
        .collect::<Vec<_>>();

    let results =
        create_groups_batch(inputs.as_slice(), config, environment).map_err(|err| format!("cannot group: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = create_write_buffer(out_result);

    export_results(out_format, out_buffer, results.as_slice()).map_err(|err| format!("cannot write result: '{err}'"))
}

/// Reads configuration file, if specified, and applies command line overrides on top of it.
fn get_config(matches: &ArgMatches) -> Result<GroupingConfig, String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| {
            serde_json::from_reader::<_, GroupingConfig>(BufReader::new(open_file(path, "config")))
                .map_err(|err| format!("cannot read config: '{err}'"))
        })
        .transpose()?
        .unwrap_or_default();

    let target_size = parse_int_value::<usize>(matches, TARGET_SIZE_ARG_NAME, "target group size")?;
    let min_size = parse_int_value::<usize>(matches, MIN_SIZE_ARG_NAME, "min group size")?;
    let max_size = parse_int_value::<usize>(matches, MAX_SIZE_ARG_NAME, "max group size")?;
    let target_groups = parse_int_value::<usize>(matches, TARGET_GROUPS_ARG_NAME, "target groups")?;
    let strategy = matches
        .get_one::<String>(STRATEGY_ARG_NAME)
        .map(|strategy| strategy.parse::<ClusteringStrategy>())
        .transpose()
        .map_err(|err| err.to_string())?;

    let sizes = (
        target_size.unwrap_or(config.target_size),
        min_size.unwrap_or(config.min_size),
        max_size.unwrap_or(config.max_size),
    );
    let strategy = strategy.unwrap_or(config.strategy);

    let config = config.with_sizes(sizes.0, sizes.1, sizes.2).with_strategy(strategy);

    Ok(match target_groups {
        Some(target_groups) => config.with_target_groups(target_groups),
        None => config,
    })
}

fn get_environment(matches: &ArgMatches) -> Arc<Environment> {
    if matches.get_flag(LOG_ARG_NAME) {
        // stdout can be taken by the result output
        Arc::new(Environment::new(Arc::new(|msg: &str| eprintln!("{msg}"))))
    } else {
        Arc::new(Environment::new_silent())
    }
}
