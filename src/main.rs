// Date/time picker demo
// Renders one page of the calendar to the terminal

use anyhow::{anyhow, Result};
use datetime_picker::models::settings::PickerSettings;
use datetime_picker::models::view::DateView;
use datetime_picker::services::calendar::CalendarBody;
use datetime_picker::services::settings::SettingsService;
use datetime_picker::{Calendar, DateInput, DateTimeAdapter, NativeDateTimeAdapter};

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting date/time picker demo");

    let settings = load_settings_or_default(&SettingsService::default_location());
    let adapter = NativeDateTimeAdapter::new();
    let mut calendar = Calendar::from_settings(adapter, &settings)?;

    if let Some(arg) = std::env::args().nth(1) {
        let moment = calendar
            .adapter()
            .get_valid_date_or_null(DateInput::from(arg.as_str()))
            .ok_or_else(|| anyhow!("Not a date: {}", arg))?;
        calendar.set_picker_moment(DateInput::Value(moment.clone()));
        calendar.select_date(moment);
    }

    println!("{}", calendar.period_button_text());
    print_body(&calendar.body(), calendar.current_view());

    for event in calendar.drain_events() {
        log::debug!("{} {:?}", event.name(), event.date());
    }

    Ok(())
}

fn load_settings_or_default(service: &SettingsService) -> PickerSettings {
    match service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            PickerSettings::default()
        }
    }
}

fn print_body(body: &CalendarBody, view: DateView) {
    let grid = body.grid();
    let width = if view == DateView::Month { 4 } else { 7 };

    if !grid.weekdays.is_empty() {
        if !grid.week_numbers.is_empty() {
            print!("{:>width$}", "", width = width);
        }
        for weekday in &grid.weekdays {
            print!("{:>width$}", weekday.short, width = width);
        }
        println!();
    }

    for (row_index, row) in body.rows().iter().enumerate() {
        if let Some(week) = grid.week_numbers.get(row_index) {
            print!("{:>width$}", week, width = width);
        }
        for (col_index, cell) in row.iter().enumerate() {
            let text = if body.is_hidden(cell) {
                String::new()
            } else if body.is_selected(cell.value()) {
                format!("[{}]", cell.display_value())
            } else if body.is_today(cell.value()) {
                format!("*{}", cell.display_value())
            } else if body.is_active_cell(row_index, col_index) {
                format!(">{}", cell.display_value())
            } else if !cell.enabled() {
                format!("({})", cell.display_value())
            } else {
                cell.display_value().to_string()
            };
            print!("{:>width$}", text, width = width);
        }
        println!();
    }
}
