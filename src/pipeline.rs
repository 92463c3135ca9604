use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageMetrics {
    pub name: String,
    pub count: u64,
    /// Share of the whole pipeline as a rounded percent; 0 when the pipeline
    /// is empty.
    pub percentage: u32,
    /// Conversion from the previous stage as a rounded percent. None for the
    /// first stage; 0 when the previous stage had no items.
    pub conversion_rate: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineReport {
    pub stages: Vec<StageMetrics>,
    pub total: u64,
    /// Mean of the defined conversion rates; 0 when none are defined.
    pub average_conversion_rate: f64,
}

/// Derives per-stage share and stage-over-stage conversion from an ordered
/// sequence of stage counts. Division by zero never occurs: empty totals and
/// empty previous stages both come out as 0.
pub fn pipeline_report<S: AsRef<str>>(counts: &[(S, u64)]) -> PipelineReport {
    let total: u64 = counts.iter().map(|(_, count)| *count).sum();

    let mut stages = Vec::with_capacity(counts.len());
    for (index, (name, count)) in counts.iter().enumerate() {
        let percentage = if total > 0 {
            round_ratio(*count, total)
        } else {
            0
        };
        let conversion_rate = if index == 0 {
            None
        } else {
            let previous = counts[index - 1].1;
            Some(if previous > 0 {
                round_ratio(*count, previous)
            } else {
                0
            })
        };
        stages.push(StageMetrics {
            name: name.as_ref().to_string(),
            count: *count,
            percentage,
            conversion_rate,
        });
    }

    let defined: Vec<u32> = stages
        .iter()
        .filter_map(|stage| stage.conversion_rate)
        .collect();
    let average_conversion_rate = if defined.is_empty() {
        0.0
    } else {
        defined.iter().map(|&rate| f64::from(rate)).sum::<f64>() / defined.len() as f64
    };

    PipelineReport {
        stages,
        total,
        average_conversion_rate,
    }
}

fn round_ratio(part: u64, whole: u64) -> u32 {
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
