use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use sizhu_base::{
    BaseError, Dizhi, DizhiRelation, NAYIN_NAMES, Tiangan, TianganRelation,
    discover_dizhi_relations, discover_tiangan_relations, nayin, sexagenary_cycle,
};
use sizhu_calendar::{
    CalendarDate, CalendarKind, ReferenceTables, day_ganzhi, get_day_ganzhi, jieqi_of_year,
    to_ganzhi, to_lunar, to_solar,
};
use sizhu_chart::{
    ALL_PILLAR_POSITIONS, BaziChart, BaziGender, BaziPrecision, FourPillars, parse_birth_time,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;

use config::SizhuConfig;
use error::CliError;

#[derive(Parser)]
#[command(name = "sizhu", about = "BaZi four-pillar charts and calendar conversions")]
struct Cli {
    /// Reference table file (jieqi and lunar years)
    #[arg(long, global = true, env = "SIZHU_DATA")]
    data: Option<PathBuf>,
    /// Config file (default: ./sizhu.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars and annotations for a birth time
    Chart {
        /// Local birth time (YYYY-MM-DDThh:mm[:ss], no timezone)
        birth: String,
        /// male/m/男/乾 or female/f/女/坤
        #[arg(long)]
        gender: Option<BaziGender>,
        /// day (hour and minute are not supported yet)
        #[arg(long, default_value = "day")]
        precision: BaziPrecision,
        /// Print the JSON snapshot
        #[arg(long)]
        json: bool,
    },
    /// Sexagenary day of a solar date
    DayGanzhi {
        /// Solar date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a date between solar, lunar and ganzhi calendars
    Convert {
        /// Date as YYYY-MM-DD in the source calendar (lunar months are ordinal)
        date: String,
        #[arg(long, value_enum, default_value_t = DateKind::Solar)]
        from: DateKind,
    },
    /// List the sixty-pair cycle with nayin
    Cycle,
    /// The 24 solar terms of a Gregorian year
    Jieqi { year: i32 },
    /// Decade, childhood and annual luck pillars
    Luck {
        /// Local birth time (YYYY-MM-DDThh:mm[:ss], no timezone)
        birth: String,
        #[arg(long)]
        gender: Option<BaziGender>,
        /// Number of decade and annual pillars to list
        #[arg(long, default_value_t = 8)]
        count: usize,
    },
    /// Combinations, clashes and punishments among stems and branches
    Relations {
        /// Heavenly stems, comma separated (甲,庚 or jia,geng)
        #[arg(long, value_delimiter = ',')]
        stems: Vec<String>,
        /// Earthly branches, comma separated (子,卯 or zi,mao)
        #[arg(long, value_delimiter = ',')]
        branches: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DateKind {
    Solar,
    Lunar,
    Ganzhi,
}

impl DateKind {
    fn calendar_kind(self) -> CalendarKind {
        match self {
            Self::Solar => CalendarKind::Solar,
            Self::Lunar => CalendarKind::Lunar,
            Self::Ganzhi => CalendarKind::Ganzhi,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sizhu=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = SizhuConfig::discover(cli.config.as_deref())?;
    let data_path = config.data_path(cli.data);

    match cli.command {
        Commands::Chart {
            birth,
            gender,
            precision,
            json,
        } => {
            let tables = load_tables(&data_path)?;
            let birth = parse_birth_time(&birth)?;
            let chart = BaziChart::create(birth, config.gender(gender), precision, &tables)?;
            if config.json(json) {
                println!("{}", chart.snapshot().to_json_pretty()?);
            } else {
                print_chart(&chart);
            }
        }

        Commands::DayGanzhi { date } => {
            let date = parse_solar_date(&date)?;
            let gz = day_ganzhi(date);
            match nayin(gz) {
                Some(name) => println!("{} {gz} ({name})", date.format("%Y-%m-%d")),
                None => println!("{} {gz}", date.format("%Y-%m-%d")),
            }
        }

        Commands::Convert { date, from } => {
            let tables = load_tables(&data_path)?;
            let (y, m, d) = parse_ymd(&date)?;
            let input = CalendarDate::new(y, m, d, from.calendar_kind());
            let solar = to_solar(&tables, &input)?;
            println!("{solar}");
            println!("{}", to_lunar(&tables, &input)?);
            println!("{}", to_ganzhi(&tables, &input)?);
            println!("day pillar {}", get_day_ganzhi(&solar)?);
        }

        Commands::Cycle => {
            for (i, gz) in sexagenary_cycle().iter().enumerate() {
                println!(
                    "{:2} {gz} {} {}",
                    i + 1,
                    gz.dizhi.shengxiao(),
                    NAYIN_NAMES[i / 2]
                );
            }
        }

        Commands::Jieqi { year } => {
            let tables = load_tables(&data_path)?;
            for (term, date) in jieqi_of_year(&tables, year)? {
                let kind = if term.is_jie() { "jie" } else { "qi " };
                println!("{} {kind} {}", date.format("%Y-%m-%d"), term.hanzi());
            }
        }

        Commands::Luck {
            birth,
            gender,
            count,
        } => {
            let tables = load_tables(&data_path)?;
            let birth = parse_birth_time(&birth)?;
            let chart =
                BaziChart::create(birth, config.gender(gender), BaziPrecision::Day, &tables)?;
            print_luck(&chart, &tables, count)?;
        }

        Commands::Relations { stems, branches } => {
            let stems: Vec<Tiangan> = parse_all(&stems)?;
            let branches: Vec<Dizhi> = parse_all(&branches)?;
            print_relations(
                &discover_tiangan_relations(&stems),
                &discover_dizhi_relations(&branches),
            );
        }
    }

    Ok(())
}

fn load_tables(path: &Path) -> Result<ReferenceTables, CliError> {
    let tables = ReferenceTables::load(path).map_err(|source| CliError::Data {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(range) = tables.year_range() {
        info!(path = %path.display(), first = range.start(), last = range.end(), "reference data");
    }
    Ok(tables)
}

fn parse_solar_date(s: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| CliError::Argument(format!("'{s}': {e}")))
}

/// Stems or branches by hanzi or pinyin.
fn parse_all<T: FromStr<Err = BaseError>>(items: &[String]) -> Result<Vec<T>, CliError> {
    items
        .iter()
        .map(|s| s.parse::<T>().map_err(CliError::from))
        .collect()
}

/// `YYYY-MM-DD` as plain numbers, without checking the day exists.
fn parse_ymd(s: &str) -> Result<(i32, u32, u32), CliError> {
    let bad = || CliError::Argument(format!("'{s}': expected YYYY-MM-DD"));
    let mut parts = s.trim().splitn(3, '-');
    let y = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    let m = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    let d = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
    Ok((y, m, d))
}

fn row<T>(label: &str, values: FourPillars<T>, f: impl Fn(&T) -> String) {
    let cells: Vec<String> = values.iter().map(|v| format!("{:<10}", f(v))).collect();
    println!("{label:<8}{}", cells.concat().trim_end());
}

fn print_chart(chart: &BaziChart) {
    let bazi = chart.bazi();
    println!(
        "{} {} | lunar {} | ganzhi {}",
        bazi.solar_datetime().format("%Y-%m-%d %H:%M"),
        bazi.gender().hanzi(),
        bazi.lunar_date(),
        bazi.ganzhi_date()
    );

    row("", FourPillars::from(ALL_PILLAR_POSITIONS), |p| p.hanzi().to_string());
    row("ganzhi", chart.pillars(), |gz| gz.to_string());
    let traits = chart.traits();
    row("stem", traits, |t| t.tiangan.to_string());
    row("branch", traits, |t| t.dizhi.to_string());
    row("hidden", chart.hidden_tiangans(), |h| {
        h.iter().map(|(tg, _)| tg.hanzi()).collect()
    });
    let shishens = chart.shishens();
    row("shishen", shishens, |s| {
        s.tiangan.map_or_else(|| "日主".to_owned(), |ss| ss.to_string())
    });
    row("", shishens, |s| s.dizhi.to_string());
    row("nayin", chart.nayins(), |n| n.map_or_else(|| "-".to_owned(), str::to_owned));
    row("stage", chart.shier_zhangshengs(), |z| z.to_string());

    let counts: Vec<String> = chart
        .wuxing_counts()
        .iter()
        .map(|(w, n)| format!("{w}{n}"))
        .collect();
    println!("wuxing  {}", counts.join(" "));

    print_relations(&chart.tiangan_relations(), &chart.dizhi_relations());
    let stars: Vec<String> = chart
        .shensha()
        .iter()
        .filter(|(_, branches)| !branches.is_empty())
        .map(|(star, branches)| format!("{star}:{}", hanzi_string(branches)))
        .collect();
    if !stars.is_empty() {
        println!("shensha {}", stars.join(" "));
    }
}

fn hanzi_string<'a>(dizhis: impl IntoIterator<Item = &'a Dizhi>) -> String {
    dizhis.into_iter().map(|d| d.hanzi()).collect()
}

/// One `relation:members` entry per combo; relations with no combo are skipped.
fn print_relations(
    tiangan: &BTreeMap<TianganRelation, Vec<[Tiangan; 2]>>,
    dizhi: &BTreeMap<DizhiRelation, Vec<Vec<Dizhi>>>,
) {
    let stems: Vec<String> = tiangan
        .iter()
        .flat_map(|(r, pairs)| pairs.iter().map(move |[a, b]| format!("{r}:{a}{b}")))
        .collect();
    let branches: Vec<String> = dizhi
        .iter()
        .flat_map(|(r, combos)| combos.iter().map(move |c| format!("{r}:{}", hanzi_string(c))))
        .collect();
    if !stems.is_empty() {
        println!("stems   {}", stems.join(" "));
    }
    if !branches.is_empty() {
        println!("branches {}", branches.join(" "));
    }
}

fn print_luck(chart: &BaziChart, tables: &ReferenceTables, count: usize) -> Result<(), CliError> {
    let start = chart.dayun_start(tables)?;
    let start_xusui = start.start_xusui(chart.bazi());
    println!(
        "{} ({}), {} days to {} {}: dayun starts after {}y {}m on {} (ganzhi year {})",
        start.direction,
        start.direction.hanzi(),
        start.days,
        start.jie.hanzi(),
        start.jie_date.format("%Y-%m-%d"),
        start.years,
        start.months,
        start.start_date.format("%Y-%m-%d"),
        start.ganzhi_year
    );

    let xiaoyun: Vec<String> = chart
        .xiaoyun()
        .take_while(|x| i64::from(x.xusui) < i64::from(start_xusui))
        .map(|x| format!("{}岁{}", x.xusui, x.ganzhi))
        .collect();
    if !xiaoyun.is_empty() {
        println!("xiaoyun {}", xiaoyun.join(" "));
    }

    for d in chart.dayun(tables)?.take(count) {
        println!("dayun   {} {}", d.start_ganzhi_year, d.ganzhi);
    }
    for l in chart.liunian().take(count) {
        println!("liunian {} {}", l.ganzhi_year, l.ganzhi);
    }
    Ok(())
}
