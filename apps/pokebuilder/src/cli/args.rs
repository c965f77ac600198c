use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::DEFAULT_BINS;
use crate::domain::creature::Stat;
use crate::query::{QueryFilters, SortBy, StatFilter, TypeFilter};

#[derive(Parser, Debug)]
#[command(name = "pokebuilder")]
#[command(about = "Browse the creature catalog and manage saved teams")]
#[command(version)]
pub struct Cli {
    /// Catalog CSV file (overrides POKEBUILDER_CATALOG)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Team store CSV file (overrides POKEBUILDER_TEAMS)
    #[arg(long, global = true)]
    pub teams: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog records matching the filters
    List(ListArgs),
    /// List every type that appears in the catalog
    Types,
    /// Manage saved teams
    Team {
        #[command(subcommand)]
        command: TeamCommand,
    },
    /// Print the data behind a chart
    Chart {
        #[command(subcommand)]
        command: ChartCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Case-insensitive part of the name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Primary or secondary type, or All
    #[arg(long = "type", default_value = "All")]
    pub type_filter: TypeFilter,

    /// Stat the minimum applies to, or All
    #[arg(long, default_value = "All")]
    pub stat: StatFilter,

    /// Minimum value for --stat
    #[arg(long, default_value_t = 0)]
    pub min: i64,

    /// Sort key: name, type or number
    #[arg(long, default_value = "number")]
    pub sort: SortBy,
}

impl From<ListArgs> for QueryFilters {
    fn from(args: ListArgs) -> Self {
        QueryFilters {
            name_contains: args.name,
            type_filter: args.type_filter,
            stat: args.stat,
            min_value: args.min,
            sort_by: args.sort,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// Save a new team
    Save {
        name: String,
        #[arg(required = true)]
        members: Vec<String>,
    },
    /// Add a creature to a team, creating the team if needed
    Add { team: String, creature: String },
    /// Remove a creature from a team
    Remove { team: String, creature: String },
    /// Delete the team at a position shown by `team list`
    Delete { index: usize },
    /// List saved teams
    List,
    /// Show a team's members with their stats
    Show { name: String },
}

#[derive(Subcommand, Debug)]
pub enum ChartCommand {
    /// Distribution of one stat over the catalog
    Hist {
        #[arg(long, default_value = "HP")]
        stat: Stat,
        #[arg(long, default_value_t = DEFAULT_BINS)]
        bins: usize,
        /// Restrict to a primary type
        #[arg(long = "type", default_value = "All")]
        type_filter: TypeFilter,
    },
    /// Stat correlation matrix over the catalog or a team
    Corr {
        #[arg(long)]
        team: Option<String>,
        /// Restrict to a primary type (catalog only)
        #[arg(long = "type", default_value = "All")]
        type_filter: TypeFilter,
    },
    /// Mean of a stat per primary type
    ByType {
        #[arg(long)]
        stat: Stat,
        #[arg(long = "type", default_value = "All")]
        type_filter: TypeFilter,
    },
    /// One stat for each team member
    Bar {
        #[arg(long)]
        team: String,
        #[arg(long)]
        stat: Stat,
    },
    /// Each member's share of a stat; every stat when --stat is omitted
    Share {
        #[arg(long)]
        team: String,
        #[arg(long)]
        stat: Option<Stat>,
    },
}
