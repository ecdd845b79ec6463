use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::Write,
    path::Path,
};

use csv::WriterBuilder;
use route_planner::{
    error::RouteResult,
    graph::{Locations, Route},
    solve_both, Cost, Objective, RouteError, RouteMap,
};
use serde::Serialize;

use crate::records_io::import_records;

/// The outcome of one objective, ready to be printed or exported.
#[derive(Debug, Clone)]
pub struct RouteReport {
    objective: Objective,
    names: Vec<String>,
    distance: Option<Cost>,
}

#[derive(Debug, Serialize)]
pub struct RouteRow<'a> {
    objective: String,
    distance: Option<Cost>,
    route: &'a str,
}

impl RouteReport {
    /// Only [`RouteError::NoPathFound`] is an answer; every other error is passed on.
    pub fn new(
        objective: Objective,
        route: RouteResult<Route>,
        locations: &Locations,
    ) -> RouteResult<Self> {
        match route {
            Ok(route) => Ok(RouteReport {
                objective,
                names: route
                    .names(locations)
                    .into_iter()
                    .map(String::from)
                    .collect(),
                distance: Some(route.cost()),
            }),
            Err(RouteError::NoPathFound) => Ok(RouteReport {
                objective,
                names: vec![],
                distance: None,
            }),
            Err(e) => Err(e),
        }
    }

    pub fn route(&self) -> String {
        self.names.join("->")
    }

    pub fn distance(&self) -> Option<Cost> {
        self.distance
    }

    pub fn to_row<'a>(&self, route: &'a str) -> RouteRow<'a> {
        RouteRow {
            objective: self.objective.to_string(),
            distance: self.distance,
            route,
        }
    }
}

impl Display for RouteReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let title = match self.objective {
            Objective::Shortest => "Shortest",
            Objective::Longest => "Longest",
        };
        match self.distance {
            Some(distance) => {
                writeln!(f, "{} route: {}", title, self.route())?;
                write!(
                    f,
                    "The distance of the {} route is {}",
                    self.objective, distance
                )
            }
            None => write!(f, "No {} route visits every location.", self.objective),
        }
    }
}

pub fn compute_reports(map: &RouteMap, parallel: bool) -> RouteResult<Vec<RouteReport>> {
    if map.is_empty() {
        return Err(RouteError::NoLocations);
    }
    if !map.connected() {
        log::warn!("The locations do not form a single connected group.");
    }

    let (shortest, longest) = solve_both(map.matrix(), parallel);
    Ok(vec![
        RouteReport::new(Objective::Shortest, shortest, map.locations())?,
        RouteReport::new(Objective::Longest, longest, map.locations())?,
    ])
}

pub fn export<W: Write>(reports: &[RouteReport], writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for report in reports {
        let route = report.route();
        wtr.serialize(report.to_row(&route))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn execute_routes(
    input: &Path,
    parallel: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let records = import_records(input)?;
    let map = RouteMap::from_records(&records);
    println!(
        "Imported {} locations and {} connections.",
        map.len(),
        map.graph().m()
    );

    let reports = compute_reports(&map, parallel)?;
    for report in &reports {
        println!("{}", report);
    }

    if let Some(path) = output {
        log::info!("Exporting results to {:?}.", path);
        export(&reports, std::fs::File::create(path)?)?;
    }
    Ok(())
}
