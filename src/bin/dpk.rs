extern crate datepick as lib;

use chrono::Local;
use flexi_logger::{FileSpec, Logger};
use lib::cmds::Cmd;
use lib::config::{load_suitable_config, Config};
use lib::view::MonthView;
use lib::{build_grid, parse_date, CalendarDate, DatePicker, PanelPosition};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dpk",
    about = "datepick - month grid and DD-MM-YYYY date picker."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    #[structopt(about = "show the month of a date with the date selected")]
    Show {
        #[structopt(help = "date as DD-MM-YYYY, defaults to today")]
        date: Option<CalendarDate>,
    },
    #[structopt(about = "validate a date text and print its canonical form")]
    Parse {
        #[structopt(help = "text to parse")]
        text: String,
    },
    #[structopt(about = "pick a date interactively from stdin")]
    Pick {
        #[structopt(help = "initially selected date as DD-MM-YYYY, defaults to today")]
        date: Option<CalendarDate>,
    },
}

fn show(config: &Config, date: CalendarDate, today: CalendarDate) {
    let grid = build_grid(PanelPosition::from(&date), config.week_start);
    print!(
        "{}",
        MonthView::new(&grid)
            .symbols(config)
            .selected(date)
            .today(today)
    );
}

fn render(
    out: &mut impl Write,
    config: &Config,
    picker: &DatePicker,
    today: CalendarDate,
) -> io::Result<()> {
    if let Some(grid) = picker.grid() {
        write!(
            out,
            "{}",
            MonthView::new(&grid)
                .symbols(config)
                .selected(picker.selected())
                .today(today)
        )?;
    }
    write!(out, "[{}] ", picker.text())?;
    out.flush()
}

/// Every line is a bound key, `:<n>` to click the n-th cell or a date text
/// which is committed right away.
fn pick(config: &Config, date: CalendarDate, today: CalendarDate) -> io::Result<()> {
    let mut picker = DatePicker::new(date).week_start(config.week_start);
    picker.send_cmd(Cmd::Open);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    render(&mut out, config, &picker, today)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        let committed = if input.is_empty() {
            None
        } else if let Some(cmd) = config.cmd_for(input) {
            if cmd == Cmd::Exit {
                break;
            }
            picker.send_cmd(cmd)
        } else if let Some(index) = input.strip_prefix(':') {
            match index.parse::<usize>() {
                Ok(n) if n >= 1 => picker.select_cell(n - 1),
                _ => {
                    log::warn!("'{}' is not a cell number", index);
                    None
                }
            }
        } else {
            picker.set_text(input);
            picker.send_cmd(Cmd::Commit)
        };

        if let Some(date) = committed {
            writeln!(out, "selected {}", date)?;
        }

        render(&mut out, config, &picker, today)?;
    }

    picker.send_cmd(Cmd::Dismiss);
    writeln!(out)?;
    writeln!(out, "{}", picker.selected())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    std::panic::set_hook(Box::new(move |info| {
        eprintln!("datepick ran into a fatal error!");
        eprintln!("{}", info);
        eprintln!("{:?}", backtrace::Backtrace::new());
    }));

    let config = load_suitable_config(args.configfile.as_deref())?;
    let today = CalendarDate::from(Local::now().naive_local());

    match args.command {
        Command::Show { date } => show(&config, date.unwrap_or(today), today),
        Command::Parse { text } => println!("{}", parse_date(&text)?),
        Command::Pick { date } => pick(&config, date.unwrap_or(today), today)?,
    }

    Ok(())
}
