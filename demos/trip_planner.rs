use digraph::{Digraph, VertexId};

#[derive(Debug, Clone, Copy)]
struct RoadSegment {
    miles: f64,
    miles_per_hour: f64,
}

impl RoadSegment {
    fn hours(&self) -> f64 {
        self.miles / self.miles_per_hour
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TripMetric {
    Distance,
    Time,
}

fn main() {
    let mut road_map = Digraph::new();

    road_map.add_vertex(1, "Irvine").unwrap();
    road_map.add_vertex(2, "Los Angeles").unwrap();
    road_map.add_vertex(3, "San Diego").unwrap();
    road_map.add_vertex(4, "Riverside").unwrap();

    let segments = [
        (1, 2, 41.0, 55.0),
        (2, 1, 41.0, 30.0),
        (1, 3, 85.0, 70.0),
        (3, 1, 85.0, 70.0),
        (1, 4, 44.0, 60.0),
        (4, 2, 60.0, 65.0),
        (2, 3, 120.0, 65.0),
    ];

    for (from, to, miles, miles_per_hour) in segments {
        road_map
            .add_edge(
                from,
                to,
                RoadSegment {
                    miles,
                    miles_per_hour,
                },
            )
            .unwrap();
    }

    let trips = [
        (1, 3, TripMetric::Distance),
        (4, 3, TripMetric::Time),
        (3, 4, TripMetric::Distance),
    ];

    for (start, end, metric) in trips {
        print_trip(&road_map, start, end, metric);
    }
}

fn print_trip(road_map: &Digraph<&str, RoadSegment>, start: VertexId, end: VertexId, metric: TripMetric) {
    let paths = match metric {
        TripMetric::Distance => road_map
            .find_shortest_paths(start, |segment: &RoadSegment| segment.miles)
            .unwrap(),
        TripMetric::Time => road_map
            .find_shortest_paths(start, |segment: &RoadSegment| segment.hours())
            .unwrap(),
    };

    // Walk the predecessor map backward from the destination and reverse to
    // get the route in travel order.
    let mut route = paths.reconstruct(end).collect::<Vec<_>>();
    route.reverse();
    route.push(end);

    if route.first() != Some(&start) {
        println!(
            "No route from {} to {}",
            road_map.vertex(start).unwrap(),
            road_map.vertex(end).unwrap()
        );
        return;
    }

    let label = match metric {
        TripMetric::Distance => "Shortest distance",
        TripMetric::Time => "Shortest driving time",
    };
    println!(
        "{label} from {} to {}:",
        road_map.vertex(start).unwrap(),
        road_map.vertex(end).unwrap()
    );

    // The true cost is re-derived from the edge attributes, not taken from
    // the algorithm's internal distances.
    let mut total = 0.0;

    for leg in route.windows(2) {
        let segment = road_map.edge(leg[0], leg[1]).unwrap();
        let cost = match metric {
            TripMetric::Distance => segment.miles,
            TripMetric::Time => segment.hours(),
        };
        total += cost;

        match metric {
            TripMetric::Distance => println!(
                "  {} -> {} ({:.1} miles)",
                road_map.vertex(leg[0]).unwrap(),
                road_map.vertex(leg[1]).unwrap(),
                segment.miles,
            ),
            TripMetric::Time => println!(
                "  {} -> {} ({:.1} miles @ {:.0} mph = {:.2} hours)",
                road_map.vertex(leg[0]).unwrap(),
                road_map.vertex(leg[1]).unwrap(),
                segment.miles,
                segment.miles_per_hour,
                segment.hours(),
            ),
        }
    }

    match metric {
        TripMetric::Distance => println!("Total distance: {total:.1} miles"),
        TripMetric::Time => println!("Total time: {total:.2} hours"),
    }
    println!();
}
