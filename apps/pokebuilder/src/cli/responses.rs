use serde::Serialize;
use std::io::{self, Write};

use crate::analysis::{BarPoint, CorrelationMatrix, HistogramBin, StatBreakdown, TypeMean};
use crate::domain::creature::{Creature, Stat};
use crate::domain::team::Team;

/// Message shown when a query matches nothing
pub const NO_RESULTS: &str = "No results found.";

/// Catalog record as shown in listings
#[derive(Debug, Serialize)]
pub struct CreatureResponse {
    pub number: u32,
    pub name: String,
    pub type1: String,
    pub type2: Option<String>,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub total: u32,
}

impl From<&Creature> for CreatureResponse {
    fn from(creature: &Creature) -> Self {
        let stats = creature.stats();
        Self {
            number: creature.number(),
            name: creature.name().to_string(),
            type1: creature.type1().to_string(),
            type2: creature.type2().map(str::to_string),
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            special_attack: stats.special_attack,
            special_defense: stats.special_defense,
            speed: stats.speed,
            total: stats.total(),
        }
    }
}

impl CreatureResponse {
    fn types(&self) -> String {
        match &self.type2 {
            Some(t2) => format!("{}/{}", self.type1, t2),
            None => self.type1.clone(),
        }
    }
}

/// Saved team with its position in the store
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub index: usize,
    pub name: String,
    pub members: Vec<String>,
}

impl TeamResponse {
    pub fn new(index: usize, team: &Team) -> Self {
        Self {
            index,
            name: team.name().to_string(),
            members: team.members().to_vec(),
        }
    }
}

/// Team members resolved against the catalog
#[derive(Debug, Serialize)]
pub struct TeamDetailResponse {
    pub name: String,
    pub members: Vec<String>,
    pub creatures: Vec<CreatureResponse>,
    /// Members without a catalog record
    pub unknown: Vec<String>,
}

/// Everything a command can print
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Creatures(Vec<CreatureResponse>),
    Types(Vec<String>),
    Teams(Vec<TeamResponse>),
    TeamDetail(TeamDetailResponse),
    Message { message: String },
    Histogram { stat: Stat, bins: Vec<HistogramBin> },
    Correlation(CorrelationMatrix),
    TypeMeans { stat: Stat, means: Vec<TypeMean> },
    Bars { stat: Stat, bars: Vec<BarPoint> },
    Shares(Vec<StatBreakdown>),
}

impl Response {
    pub fn message(message: impl Into<String>) -> Self {
        Response::Message {
            message: message.into(),
        }
    }

    /// Writes the response as a JSON document or as text
    pub fn write_to<W: Write>(&self, json: bool, out: &mut W) -> Result<(), super::CliError> {
        if json {
            serde_json::to_writer_pretty(&mut *out, self)?;
            writeln!(out)?;
        } else {
            self.render(out)?;
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Response::Creatures(creatures) => {
                if creatures.is_empty() {
                    return writeln!(out, "{}", NO_RESULTS);
                }
                for c in creatures {
                    writeln!(
                        out,
                        "#{:<4} {:<24} {:<18} HP {:>3}  Atk {:>3}  Def {:>3}  SpA {:>3}  SpD {:>3}  Spe {:>3}",
                        c.number, c.name, c.types(), c.hp, c.attack, c.defense,
                        c.special_attack, c.special_defense, c.speed
                    )?;
                }
                Ok(())
            }
            Response::Types(types) => types.iter().try_for_each(|t| writeln!(out, "{}", t)),
            Response::Teams(teams) => {
                if teams.is_empty() {
                    return writeln!(out, "No saved teams.");
                }
                teams.iter().try_for_each(|t| {
                    writeln!(out, "{}. {} - {}", t.index, t.name, t.members.join(","))
                })
            }
            Response::TeamDetail(detail) => {
                writeln!(out, "{} ({} members)", detail.name, detail.members.len())?;
                for c in &detail.creatures {
                    writeln!(
                        out,
                        "  {} - Type: {}, Stats: HP {}, Atk {}",
                        c.name,
                        c.types(),
                        c.hp,
                        c.attack
                    )?;
                }
                for name in &detail.unknown {
                    writeln!(out, "  {} - not in catalog", name)?;
                }
                Ok(())
            }
            Response::Message { message } => writeln!(out, "{}", message),
            Response::Histogram { stat, bins } => {
                writeln!(out, "Distribution of {}", stat)?;
                bins.iter().try_for_each(|b| {
                    writeln!(out, "{:>7.1} - {:>7.1}  {}", b.lower, b.upper, b.count)
                })
            }
            Response::Correlation(matrix) => {
                write!(out, "{:>8}", "")?;
                for stat in &matrix.stats {
                    write!(out, "{:>8}", stat.to_string())?;
                }
                writeln!(out)?;
                for (stat, row) in matrix.stats.iter().zip(&matrix.values) {
                    write!(out, "{:>8}", stat.to_string())?;
                    for cell in row {
                        match cell {
                            Some(v) => write!(out, "{:>8.2}", v)?,
                            None => write!(out, "{:>8}", "-")?,
                        }
                    }
                    writeln!(out)?;
                }
                Ok(())
            }
            Response::TypeMeans { stat, means } => {
                writeln!(out, "Mean {} by type", stat)?;
                means.iter().try_for_each(|m| {
                    writeln!(out, "{:<10} {:>7.2}  ({})", m.type_name, m.mean, m.count)
                })
            }
            Response::Bars { stat, bars } => {
                writeln!(out, "{} by member", stat)?;
                bars.iter()
                    .try_for_each(|b| writeln!(out, "{:<24} {:>4}", b.name, b.value))
            }
            Response::Shares(breakdowns) => {
                for breakdown in breakdowns {
                    writeln!(out, "{} (total {})", breakdown.stat, breakdown.total)?;
                    if breakdown.shares.is_empty() {
                        writeln!(out, "  No data available")?;
                    }
                    for share in &breakdown.shares {
                        writeln!(
                            out,
                            "  {:<24} {:>5.1}% ({})",
                            share.name, share.percent, share.value
                        )?;
                    }
                }
                Ok(())
            }
        }
    }
}
