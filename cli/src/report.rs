use anyhow::Result;
use staygrid_core::{BoardService, GuestDirectory, DAYS_PER_WEEK};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Guest")]
    guest: String,
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Room")]
    room: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Days")]
    days: u32,
}

/// Prints one week of the board as a grid: day header, occupancy row, then
/// per section an income summary row and the room rows. A stay shows the
/// guest name on its first day and a continuation mark on the rest.
pub fn print_schedule<D: GuestDirectory>(
    service: &BoardService<D>,
    week: usize,
    json: bool,
) -> Result<()> {
    let board = service.week_board(week)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("\n\x1b[1;36m{}\x1b[0m", board.range_label);

    let mut builder = Builder::default();

    let mut header = vec!["Room".to_string()];
    for day in &board.days {
        header.push(format!("{} {}", day.weekday, day.day_of_month));
    }
    builder.push_record(header);

    let mut occupancy = vec!["Occupancy".to_string()];
    for day in &board.days {
        occupancy.push(format!("{}%", day.occupancy_percent));
    }
    builder.push_record(occupancy);

    for section in &board.sections {
        let mut income = vec![section.title.clone()];
        for day in &board.days {
            income.push(format!("${}", day.average_income));
        }
        builder.push_record(income);

        for row in &section.rooms {
            let mut cells = vec![String::new(); DAYS_PER_WEEK];
            for block in &row.blocks {
                cells[block.start_index] = block.guest_name.clone();
                for cell in cells
                    .iter_mut()
                    .take(block.end_index + 1)
                    .skip(block.start_index + 1)
                {
                    *cell = "⋯".to_string();
                }
            }

            let mut record = vec![row.room.clone()];
            record.extend(cells);
            builder.push_record(record);
        }
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
    Ok(())
}

pub fn print_bookings<D: GuestDirectory>(service: &BoardService<D>, week: usize) -> Result<()> {
    let bookings = service.bookings(week)?;
    let window = &service.weeks()[week];
    let month = window.day(0).format("%b").to_string();

    if bookings.is_empty() {
        println!("No bookings for week {}.", week);
        return Ok(());
    }

    let rows: Vec<BookingRow> = bookings
        .iter()
        .map(|guest| {
            let id = guest.booking_id.to_string();
            BookingRow {
                id: id[..8].to_string(),
                guest: guest.name.clone(),
                section: guest.category.title().to_string(),
                room: service.catalog().rooms(guest.category)[guest.room_index].clone(),
                dates: format!("{} {}-{}", month, guest.start_day, guest.end_day),
                days: guest.stay_days(),
            }
        })
        .collect();

    println!("\n\x1b[1;36m{}\x1b[0m", window.range_label());

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);
    Ok(())
}
