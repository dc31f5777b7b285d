use {
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// A vertex cover reported by a solver engine.
///
/// Engines either answer with this struct as JSON or with the two line text
/// format of FastWVC style binaries:
///
/// ```text
/// <instance>, <weight>, <seconds>
/// <id>,<id>,...
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cover {
    /// Total weight of the cover.
    pub weight: u64,
    /// Vertex ids in the cover, ascending.
    pub members: Vec<u32>,
}

impl Cover {
    /// Parses an engine's standard output, accepting JSON as well as the two
    /// line text format.
    pub fn parse(output: &str) -> Result<Self, Error> {
        if output.trim_start().starts_with('{') {
            Ok(serde_json::from_str(output)?)
        } else {
            Self::parse_text(output)
        }
    }

    fn parse_text(output: &str) -> Result<Self, Error> {
        let mut lines = output.lines();
        let summary = lines.next().ok_or(Error::Empty)?;
        // The weight is the second `, ` delimited token of the summary line.
        let token = summary
            .split(',')
            .nth(1)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::MissingWeight(summary.to_owned()))?;
        let weight = parse_weight(token)?;

        // Engines omit the second line entirely when the cover is empty.
        let members = lines
            .next()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse()
                    .map_err(|_| Error::Member(token.to_owned()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { weight, members })
    }

    /// Whether member ids are strictly ascending.
    pub fn is_ascending(&self) -> bool {
        self.members.windows(2).all(|pair| pair[0] < pair[1])
    }
}

fn parse_weight(token: &str) -> Result<u64, Error> {
    if let Ok(weight) = token.parse() {
        return Ok(weight);
    }
    // Some engines print integral weights as floats.
    match token.parse::<f64>() {
        Ok(weight) if weight >= 0.0 && weight.fract() == 0.0 && weight <= u64::MAX as f64 => {
            Ok(weight as u64)
        }
        _ => Err(Error::Weight(token.to_owned())),
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("engine output is empty")]
    Empty,
    #[error("no weight in summary line `{0}`")]
    MissingWeight(String),
    #[error("`{0}` is not a valid cover weight")]
    Weight(String),
    #[error("`{0}` is not a valid vertex id")]
    Member(String),
    #[error("JSON deserialization error: {0:?}")]
    Json(#[from] serde_json::Error),
}
