use super::{TextBlock, or_na, yes_no};
use crate::domain::common::format_millis;
use crate::domain::tracker::TrackerStage;
use crate::domain::{BatchReading, BrewTracker};
use chrono::DateTime;

const TEMP_TREND_DELTA: f64 = 0.5;
const SG_TREND_DELTA: f64 = 0.002;

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn stage_lines(block: &mut TextBlock, tracker: &BrewTracker, index: usize, stage: &TrackerStage) {
    let current = index == tracker.stage;
    let marker = if current && tracker.active {
        "[>]"
    } else if index < tracker.stage {
        "[x]"
    } else {
        "[ ]"
    };
    block
        .line(format!("{marker} STAGE {}: {}", index + 1, stage.name.to_uppercase()))
        .line(format!(
            "Duration: {} min | Current Step: {}/{}",
            stage.duration / 60,
            stage.step + 1,
            stage.steps.len()
        ))
        .line(format!(
            "Position: {} min{}",
            stage.position / 60,
            if stage.paused { " (PAUSED)" } else { "" }
        ))
        .blank();

    for (j, step) in stage.steps.iter().enumerate() {
        let marker = if current && j == stage.step && tracker.active {
            "[>]"
        } else if j < stage.step || index < tracker.stage {
            "[x]"
        } else {
            "[ ]"
        };
        let mut line = match &step.name {
            Some(name) if !name.is_empty() => format!("  {marker} {name}"),
            _ => format!("  {marker} {} Step", title_case(&step.kind)),
        };
        if step.time > 0 {
            line.push_str(&format!(" @ {} min", step.time / 60));
        }
        if let Some(value) = step.value.filter(|v| *v != 0.0) {
            line.push_str(&format!(" ({value}°C)"));
        }
        block.line(line);

        if let Some(description) = step.description.as_deref().filter(|d| !d.is_empty()) {
            block.line(format!("     Note: {description}"));
        }
        if let Some(tooltip) = step
            .tooltip
            .as_deref()
            .filter(|t| !t.is_empty() && Some(*t) != step.description.as_deref())
        {
            block.line(format!("     Tip: {tooltip}"));
        }
        block.blank();
    }
    block.blank();
}

/// Brew-day timeline with stage and step progress markers.
pub fn brewtracker(batch_id: &str, tracker: &BrewTracker) -> String {
    let name = match tracker.name.as_deref() {
        Some(name) if !name.is_empty() && !tracker.stages.is_empty() => name,
        _ => {
            return format!(
                "No brewtracker data available for batch {batch_id}. \
                 This batch may not have brewing process tracking enabled."
            );
        }
    };

    let mut block = TextBlock::new();
    block
        .banner(&format!("BREWING PROCESS TRACKER: {name}"), 60)
        .blank()
        .line(format!(
            "Status: {} | Stage {} of {}",
            if tracker.active { "ACTIVE" } else { "INACTIVE" },
            tracker.stage + 1,
            tracker.stages.len()
        ))
        .line(format!(
            "Completed: {} | Notifications: {}",
            yes_no(tracker.completed),
            if tracker.notify.unwrap_or(false) { "On" } else { "Off" }
        ))
        .blank();

    for (index, stage) in tracker.stages.iter().enumerate() {
        stage_lines(&mut block, tracker, index, stage);
    }
    block.finish()
}

pub fn last_reading(batch_id: &str, reading: Option<&BatchReading>) -> String {
    let Some(reading) = reading else {
        return format!("No sensor readings available for batch {batch_id}.");
    };

    let mut block = TextBlock::new();
    block
        .banner("LATEST SENSOR READING", 40)
        .blank()
        .line(format!(
            "Device: {} ({})",
            or_na(reading.name.as_ref()),
            or_na(reading.device_type.as_ref())
        ))
        .field("Reading Time", format_millis(reading.time))
        .opt_field("Device ID", reading.id.as_ref())
        .blank()
        .line("MEASUREMENTS:")
        .line("-------------");

    if let Some(temp) = reading.temp {
        block.line(format!("Temperature: {temp}°C"));
    }
    if let Some(sg) = reading.sg {
        block.line(format!("Specific Gravity: {sg:.4}"));
    }
    if let Some(battery) = reading.battery {
        block.line(format!("Battery: {battery:.1}%"));
    }
    if let Some(rssi) = reading.rssi {
        block.line(format!("Signal: {rssi:.1} dBm"));
    }
    if let Some(target) = reading.target_temp {
        block.line(format!("Target Temp: {target}°C"));
    }
    if let Some(ph) = reading.ph {
        block.line(format!("pH: {ph}"));
    }
    if let Some(pressure) = reading.pressure {
        block.line(format!("Pressure: {pressure}"));
    }
    block.finish()
}

fn trend(change: f64, delta: f64) -> &'static str {
    if change > delta {
        "Rising"
    } else if change < -delta {
        "Falling"
    } else {
        "Stable"
    }
}

fn short_time(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ms.to_string())
}

/// Latest `limit` readings in upstream order plus a first-to-last trend.
/// A `limit` of zero shows every reading.
pub fn readings_summary(readings: &[BatchReading], limit: usize) -> String {
    if readings.is_empty() {
        return "No sensor readings found for this batch.".to_string();
    }

    let recent = if limit > 0 && readings.len() > limit {
        &readings[readings.len() - limit..]
    } else {
        readings
    };

    let mut block = TextBlock::new();
    block
        .banner("RECENT SENSOR READINGS SUMMARY", 50)
        .blank()
        .field("Total readings available", readings.len())
        .line(format!("Showing latest {} readings:", recent.len()))
        .blank();

    for reading in recent {
        let device = reading
            .name
            .as_deref()
            .or(reading.id.as_deref())
            .unwrap_or(&reading.kind);
        let mut line = format!("{} | {device}", short_time(reading.time));
        if let Some(temp) = reading.temp {
            line.push_str(&format!(" | {temp:.1}°C"));
        }
        if let Some(sg) = reading.sg {
            line.push_str(&format!(" | SG {sg:.4}"));
        }
        if let Some(battery) = reading.battery {
            line.push_str(&format!(" | {battery:.0}%"));
        }
        block.line(line);
    }

    if let [first, .., last] = recent
        && recent.len() >= 3
    {
        block.blank().line("TREND ANALYSIS:");
        if let (Some(from), Some(to)) = (first.temp, last.temp) {
            let change = to - from;
            block.line(format!(
                "Temperature: {} ({change:+.1}°C)",
                trend(change, TEMP_TREND_DELTA)
            ));
        }
        if let (Some(from), Some(to)) = (first.sg, last.sg) {
            let change = to - from;
            block.line(format!(
                "Specific Gravity: {} ({change:+.4})",
                trend(change, SG_TREND_DELTA)
            ));
        }
    }
    block.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reading(minutes: i64, temp: f64, sg: f64) -> BatchReading {
        serde_json::from_value(json!({
            "time": 1704067200000i64 + minutes * 60_000,
            "type": "stream",
            "name": "RAPT Pill",
            "temp": temp,
            "sg": sg,
            "battery": 87.4
        }))
        .unwrap()
    }

    #[test]
    fn tracker_without_stages_is_reported_as_missing() {
        let tracker: BrewTracker = serde_json::from_value(json!({"name": "Brew day"})).unwrap();

        assert!(brewtracker("b1", &tracker).starts_with("No brewtracker data available for batch b1."));
    }

    #[test]
    fn tracker_marks_completed_and_current_steps() {
        let tracker: BrewTracker = serde_json::from_value(json!({
            "name": "Brew day",
            "stage": 1,
            "active": true,
            "notify": true,
            "stages": [
                {"name": "Mash", "duration": 3600, "step": 1, "position": 3600,
                 "steps": [{"type": "mash", "time": 0, "name": "Mash in", "value": 67.0}]},
                {"name": "Boil", "duration": 3600, "step": 0, "position": 300, "paused": true,
                 "steps": [
                    {"type": "boil", "time": 0, "description": "Add bittering hops", "tooltip": "Add bittering hops"},
                    {"type": "event", "time": 3300, "name": "Flameout", "tooltip": "Chill"}
                 ]}
            ]
        }))
        .unwrap();

        let text = brewtracker("b1", &tracker);

        assert!(text.contains("Status: ACTIVE | Stage 2 of 2"));
        assert!(text.contains("Notifications: On"));
        assert!(text.contains("[x] STAGE 1: MASH"));
        assert!(text.contains("  [x] Mash in (67°C)"));
        assert!(text.contains("[>] STAGE 2: BOIL"));
        assert!(text.contains("Position: 5 min (PAUSED)"));
        assert!(text.contains("  [>] Boil Step\n     Note: Add bittering hops\n\n"));
        assert!(text.contains("  [ ] Flameout @ 55 min\n     Tip: Chill"));
    }

    #[test]
    fn last_reading_lists_present_measurements() {
        let text = last_reading("b1", Some(&reading(0, 19.5, 1.0123)));

        assert!(text.contains("Reading Time: 2024-01-01 00:00:00"));
        assert!(text.contains("Temperature: 19.5°C"));
        assert!(text.contains("Specific Gravity: 1.0123"));
        assert!(text.contains("Battery: 87.4%"));
        assert!(!text.contains("pH"));
        assert_eq!(last_reading("b1", None), "No sensor readings available for batch b1.");
    }

    #[test]
    fn readings_summary_keeps_latest_and_reports_trend() {
        let readings = vec![
            reading(0, 18.0, 1.050),
            reading(60, 18.5, 1.040),
            reading(120, 19.0, 1.030),
            reading(180, 19.2, 1.020),
        ];

        let text = readings_summary(&readings, 3);

        assert!(text.contains("Total readings available: 4"));
        assert!(text.contains("Showing latest 3 readings:"));
        assert!(!text.contains("01-01 00:00"));
        assert!(text.contains("01-01 01:00 | RAPT Pill | 18.5°C | SG 1.0400 | 87%"));
        assert!(text.contains("Temperature: Rising (+0.7°C)"));
        assert!(text.contains("Specific Gravity: Falling (-0.0200)"));
    }

    #[test]
    fn short_series_has_no_trend() {
        let readings = vec![reading(0, 18.0, 1.050), reading(60, 18.0, 1.049)];

        let text = readings_summary(&readings, 10);

        assert!(!text.contains("TREND ANALYSIS"));
        assert_eq!(readings_summary(&[], 10), "No sensor readings found for this batch.");
    }
}
