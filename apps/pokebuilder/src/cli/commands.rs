use std::io::Write;

use super::args::{ChartCommand, Cli, Command, TeamCommand};
use super::errors::CliError;
use super::responses::{CreatureResponse, Response, TeamDetailResponse, TeamResponse};
use crate::analysis;
use crate::config::AppConfig;
use crate::domain::creature::{CatalogStore, Creature};
use crate::domain::repositories::TeamRepository;
use crate::infrastructure::CsvTeamRepository;
use crate::query::{QueryEngine, QueryFilters};

/// Runs one command against the configured catalog and team store
///
/// The catalog is loaded first; a missing or malformed catalog aborts every
/// command, as it does at application startup.
pub fn run<W: Write>(cli: Cli, config: &AppConfig, out: &mut W) -> Result<(), CliError> {
    let catalog = CatalogStore::load(&config.catalog_path)?;
    let mut teams = CsvTeamRepository::open(&config.teams_path);

    let response = execute(cli.command, &catalog, &mut teams)?;
    response.write_to(cli.json, out)
}

/// Dispatches a parsed command
pub fn execute<R: TeamRepository>(
    command: Command,
    catalog: &CatalogStore,
    teams: &mut R,
) -> Result<Response, CliError> {
    match command {
        Command::List(args) => Ok(list(catalog, &args.into())),
        Command::Types => Ok(Response::Types(catalog.all_types())),
        Command::Team { command } => team(command, catalog, teams),
        Command::Chart { command } => chart(command, catalog, teams),
    }
}

fn list(catalog: &CatalogStore, filters: &QueryFilters) -> Response {
    let results = QueryEngine::query(catalog, filters);
    Response::Creatures(results.iter().map(CreatureResponse::from).collect())
}

fn team<R: TeamRepository>(
    command: TeamCommand,
    catalog: &CatalogStore,
    teams: &mut R,
) -> Result<Response, CliError> {
    match command {
        TeamCommand::Save { name, members } => {
            if name.trim().is_empty() {
                return Err(CliError::usage("Team name cannot be empty"));
            }
            ensure_known(catalog, &members)?;

            teams.save(&name, &members)?;
            Ok(Response::message(format!("Team '{}' saved", name.trim())))
        }
        TeamCommand::Add { team, creature } => {
            if team.trim().is_empty() {
                return Err(CliError::usage("Team name cannot be empty"));
            }
            ensure_known(catalog, std::slice::from_ref(&creature))?;

            let message = match teams.find_by_name(&team) {
                None => format!("Created team '{}' with {}", team.trim(), creature),
                Some(existing) if existing.contains(&creature) => {
                    format!("{} is already on team '{}'", creature, existing.name())
                }
                Some(existing) => format!("Added {} to team '{}'", creature, existing.name()),
            };

            teams.add_member(&team, &creature)?;
            Ok(Response::message(message))
        }
        TeamCommand::Remove { team, creature } => {
            let existing = teams
                .find_by_name(&team)
                .ok_or_else(|| CliError::not_found(format!("No team named '{}'", team)))?;
            if !existing.contains(&creature) {
                return Err(CliError::not_found(format!(
                    "{} is not on team '{}'",
                    creature,
                    existing.name()
                )));
            }

            teams.remove_member(&team, &creature)?;
            Ok(Response::message(format!(
                "Removed {} from team '{}'",
                creature,
                existing.name()
            )))
        }
        TeamCommand::Delete { index } => {
            let name = teams
                .teams()
                .get(index)
                .map(|t| t.name().to_string())
                .ok_or_else(|| CliError::not_found(format!("No team at index {}", index)))?;

            teams.delete_at(index)?;
            Ok(Response::message(format!("Team '{}' deleted successfully!", name)))
        }
        TeamCommand::List => {
            let names = teams.all_team_names()?;
            let listed = names
                .into_iter()
                .zip(teams.teams())
                .enumerate()
                .map(|(index, (name, team))| TeamResponse {
                    index,
                    name,
                    members: team.members().to_vec(),
                })
                .collect();
            Ok(Response::Teams(listed))
        }
        TeamCommand::Show { name } => {
            let team = teams
                .find_by_name(&name)
                .ok_or_else(|| CliError::not_found(format!("No team named '{}'", name)))?;

            let creatures = teams.team_creatures(catalog, &name);
            let unknown = team
                .members()
                .iter()
                .filter(|m| catalog.find(m).is_none())
                .cloned()
                .collect();

            Ok(Response::TeamDetail(TeamDetailResponse {
                name: team.name().to_string(),
                members: team.members().to_vec(),
                creatures: creatures.iter().map(CreatureResponse::from).collect(),
                unknown,
            }))
        }
    }
}

fn chart<R: TeamRepository>(
    command: ChartCommand,
    catalog: &CatalogStore,
    teams: &R,
) -> Result<Response, CliError> {
    match command {
        ChartCommand::Hist {
            stat,
            bins,
            type_filter,
        } => {
            let records = non_empty_catalog(catalog, &type_filter)?;
            let values = analysis::stat_values(&records, stat);
            Ok(Response::Histogram {
                stat,
                bins: analysis::histogram(&values, bins),
            })
        }
        ChartCommand::Corr { team, type_filter } => {
            let records = match team {
                Some(team) => team_records(catalog, teams, &team)?,
                None => non_empty_catalog(catalog, &type_filter)?,
            };
            Ok(Response::Correlation(analysis::correlation_matrix(&records)))
        }
        ChartCommand::ByType { stat, type_filter } => {
            let records = non_empty_catalog(catalog, &type_filter)?;
            Ok(Response::TypeMeans {
                stat,
                means: analysis::mean_by_type(&records, stat),
            })
        }
        ChartCommand::Bar { team, stat } => {
            let records = team_records(catalog, teams, &team)?;
            Ok(Response::Bars {
                stat,
                bars: analysis::bar_series(&records, stat),
            })
        }
        ChartCommand::Share { team, stat } => {
            let records = team_records(catalog, teams, &team)?;
            let breakdowns = match stat {
                Some(stat) => vec![analysis::share_breakdown(&records, stat)],
                None => analysis::team_breakdown(&records),
            };
            Ok(Response::Shares(breakdowns))
        }
    }
}

fn ensure_known(catalog: &CatalogStore, names: &[String]) -> Result<(), CliError> {
    match names.iter().find(|n| catalog.find(n).is_none()) {
        Some(unknown) => Err(CliError::usage(format!("Unknown creature: {}", unknown))),
        None => Ok(()),
    }
}

fn non_empty_catalog(
    catalog: &CatalogStore,
    type_filter: &crate::query::TypeFilter,
) -> Result<Vec<Creature>, CliError> {
    let records = analysis::primary_type_subset(catalog.records(), type_filter);
    if records.is_empty() {
        return Err(CliError::not_found(format!(
            "No creature data available for type {}",
            type_filter
        )));
    }
    Ok(records)
}

fn team_records<R: TeamRepository>(
    catalog: &CatalogStore,
    teams: &R,
    team: &str,
) -> Result<Vec<Creature>, CliError> {
    let records = teams.team_creatures(catalog, team);
    if records.is_empty() {
        return Err(CliError::not_found(format!(
            "No creature data available for team '{}'",
            team
        )));
    }
    Ok(records)
}
