#![allow(dead_code)]

use pitwall::ErgastClient;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CALENDAR_2023: [(&str, &str, &str); 22] = [
    ("Bahrain Grand Prix", "bahrain", "2023-03-05"),
    ("Saudi Arabian Grand Prix", "jeddah", "2023-03-19"),
    ("Australian Grand Prix", "albert_park", "2023-04-02"),
    ("Azerbaijan Grand Prix", "baku", "2023-04-30"),
    ("Miami Grand Prix", "miami", "2023-05-07"),
    ("Monaco Grand Prix", "monaco", "2023-05-28"),
    ("Spanish Grand Prix", "catalunya", "2023-06-04"),
    ("Canadian Grand Prix", "villeneuve", "2023-06-18"),
    ("Austrian Grand Prix", "red_bull_ring", "2023-07-02"),
    ("British Grand Prix", "silverstone", "2023-07-09"),
    ("Hungarian Grand Prix", "hungaroring", "2023-07-23"),
    ("Belgian Grand Prix", "spa", "2023-07-30"),
    ("Dutch Grand Prix", "zandvoort", "2023-08-27"),
    ("Italian Grand Prix", "monza", "2023-09-03"),
    ("Singapore Grand Prix", "marina_bay", "2023-09-17"),
    ("Japanese Grand Prix", "suzuka", "2023-09-24"),
    ("Qatar Grand Prix", "losail", "2023-10-08"),
    ("United States Grand Prix", "americas", "2023-10-22"),
    ("Mexico City Grand Prix", "rodriguez", "2023-10-29"),
    ("São Paulo Grand Prix", "interlagos", "2023-11-05"),
    ("Las Vegas Grand Prix", "vegas", "2023-11-19"),
    ("Abu Dhabi Grand Prix", "yas_marina", "2023-11-26"),
];

/// (driverId, code, given, family, constructorId)
pub const GRID_2023: [(&str, &str, &str, &str, &str); 20] = [
    ("max_verstappen", "VER", "Max", "Verstappen", "red_bull"),
    ("perez", "PER", "Sergio", "Pérez", "red_bull"),
    ("alonso", "ALO", "Fernando", "Alonso", "aston_martin"),
    ("sainz", "SAI", "Carlos", "Sainz", "ferrari"),
    ("hamilton", "HAM", "Lewis", "Hamilton", "mercedes"),
    ("stroll", "STR", "Lance", "Stroll", "aston_martin"),
    ("russell", "RUS", "George", "Russell", "mercedes"),
    ("bottas", "BOT", "Valtteri", "Bottas", "alfa"),
    ("gasly", "GAS", "Pierre", "Gasly", "alpine"),
    ("albon", "ALB", "Alexander", "Albon", "williams"),
    ("tsunoda", "TSU", "Yuki", "Tsunoda", "alphatauri"),
    ("sargeant", "SAR", "Logan", "Sargeant", "williams"),
    ("kevin_magnussen", "MAG", "Kevin", "Magnussen", "haas"),
    ("de_vries", "DEV", "Nyck", "de Vries", "alphatauri"),
    ("hulkenberg", "HUL", "Nico", "Hülkenberg", "haas"),
    ("zhou", "ZHO", "Guanyu", "Zhou", "alfa"),
    ("norris", "NOR", "Lando", "Norris", "mclaren"),
    ("ocon", "OCO", "Esteban", "Ocon", "alpine"),
    ("leclerc", "LEC", "Charles", "Leclerc", "ferrari"),
    ("piastri", "PIA", "Oscar", "Piastri", "mclaren"),
];

const RACE_POINTS: [u32; 10] = [25, 18, 15, 12, 10, 8, 6, 4, 2, 1];

pub fn envelope(inner: Value) -> Value {
    let mut mr = json!({
        "xmlns": "",
        "series": "f1",
        "url": "http://api.jolpi.ca/ergast/f1/",
        "limit": "30",
        "offset": "0",
        "total": "1"
    });
    if let (Some(fields), Value::Object(extra)) = (mr.as_object_mut(), inner) {
        fields.extend(extra);
    }
    json!({ "MRData": mr })
}

pub fn driver(driver_id: &str, code: &str, given: &str, family: &str) -> Value {
    json!({
        "driverId": driver_id,
        "permanentNumber": "1",
        "code": code,
        "url": format!("http://en.wikipedia.org/wiki/{family}"),
        "givenName": given,
        "familyName": family,
        "dateOfBirth": "1990-01-01",
        "nationality": "Unknown"
    })
}

pub fn constructor(constructor_id: &str) -> Value {
    let name = match constructor_id {
        "red_bull" => "Red Bull",
        "mercedes" => "Mercedes",
        "ferrari" => "Ferrari",
        "mclaren" => "McLaren",
        "aston_martin" => "Aston Martin",
        "alpine" => "Alpine F1 Team",
        "williams" => "Williams",
        "alphatauri" => "AlphaTauri",
        "alfa" => "Alfa Romeo",
        "haas" => "Haas F1 Team",
        other => other,
    };
    json!({
        "constructorId": constructor_id,
        "url": "",
        "name": name,
        "nationality": "Unknown"
    })
}

fn circuit(circuit_id: &str) -> Value {
    json!({
        "circuitId": circuit_id,
        "url": "",
        "circuitName": format!("{circuit_id} circuit"),
        "Location": {"lat": "0", "long": "0", "locality": circuit_id, "country": "Somewhere"}
    })
}

pub fn race_header(round: usize) -> Value {
    let (name, circuit_id, date) = CALENDAR_2023[round - 1];
    json!({
        "season": "2023",
        "round": round.to_string(),
        "url": "",
        "raceName": name,
        "Circuit": circuit(circuit_id),
        "date": date,
        "time": "15:00:00Z"
    })
}

pub fn schedule_2023() -> Value {
    let races: Vec<Value> = (1..=CALENDAR_2023.len()).map(race_header).collect();
    envelope(json!({"RaceTable": {"season": "2023", "Races": races}}))
}

pub fn driver_standings_2023() -> Value {
    let points = ["575", "285", "234", "206", "206", "200", "175", "97", "74", "62"];
    let standings: Vec<Value> = GRID_2023
        .iter()
        .take(points.len())
        .enumerate()
        .map(|(i, (id, code, given, family, team))| {
            json!({
                "position": (i + 1).to_string(),
                "positionText": (i + 1).to_string(),
                "points": points[i],
                "wins": if i == 0 { "19" } else if i == 1 { "2" } else { "0" },
                "Driver": driver(id, code, given, family),
                "Constructors": [constructor(team)]
            })
        })
        .collect();
    envelope(json!({
        "StandingsTable": {
            "season": "2023",
            "round": "22",
            "StandingsLists": [{"season": "2023", "round": "22", "DriverStandings": standings}]
        }
    }))
}

pub fn constructor_standings_2023() -> Value {
    let table = [
        ("red_bull", "860", "21"),
        ("mercedes", "409", "0"),
        ("ferrari", "406", "1"),
        ("mclaren", "302", "0"),
        ("aston_martin", "280", "0"),
        ("alpine", "120", "0"),
        ("williams", "28", "0"),
        ("alphatauri", "25", "0"),
        ("alfa", "16", "0"),
        ("haas", "12", "0"),
    ];
    let standings: Vec<Value> = table
        .iter()
        .enumerate()
        .map(|(i, (id, points, wins))| {
            json!({
                "position": (i + 1).to_string(),
                "positionText": (i + 1).to_string(),
                "points": points,
                "wins": wins,
                "Constructor": constructor(id)
            })
        })
        .collect();
    envelope(json!({
        "StandingsTable": {
            "season": "2023",
            "round": "22",
            "StandingsLists": [{"season": "2023", "round": "22", "ConstructorStandings": standings}]
        }
    }))
}

fn classification(index: usize) -> Value {
    let (id, code, given, family, team) = GRID_2023[index];
    let position = index + 1;
    json!({
        "number": position.to_string(),
        "position": position.to_string(),
        "positionText": position.to_string(),
        "points": RACE_POINTS.get(index).copied().unwrap_or(0).to_string(),
        "Driver": driver(id, code, given, family),
        "Constructor": constructor(team),
        "grid": (20 - index).to_string(),
        "laps": if position <= 15 { "57" } else { "56" },
        "status": if position <= 15 { "Finished" } else { "+1 Lap" }
    })
}

pub fn race_results_2023_round_1() -> Value {
    let mut race = race_header(1);
    race["Results"] = Value::Array((0..GRID_2023.len()).map(classification).collect());
    envelope(json!({"RaceTable": {"season": "2023", "round": "1", "Races": [race]}}))
}

pub fn qualifying_2023_round_1() -> Value {
    let mut race = race_header(1);
    let entries: Vec<Value> = GRID_2023
        .iter()
        .enumerate()
        .map(|(i, (id, code, given, family, team))| {
            json!({
                "number": (i + 1).to_string(),
                "position": (i + 1).to_string(),
                "Driver": driver(id, code, given, family),
                "Constructor": constructor(team),
                "Q1": format!("1:3{}.{:03}", i % 10, i),
            })
        })
        .collect();
    race["QualifyingResults"] = Value::Array(entries);
    envelope(json!({"RaceTable": {"season": "2023", "round": "1", "Races": [race]}}))
}

pub fn pit_stops_2023_round_1(driver_id: &str) -> Value {
    let mut race = race_header(1);
    race["PitStops"] = json!([
        {"driverId": driver_id, "lap": "14", "stop": "1", "time": "18:27:42", "duration": "22.483"},
        {"driverId": driver_id, "lap": "36", "stop": "2", "time": "19:04:19", "duration": "21.834"}
    ]);
    envelope(json!({"RaceTable": {"season": "2023", "round": "1", "Races": [race]}}))
}

pub fn roster_2023() -> Value {
    let drivers: Vec<Value> = GRID_2023
        .iter()
        .map(|(id, code, given, family, _)| driver(id, code, given, family))
        .collect();
    envelope(json!({"DriverTable": {"season": "2023", "Drivers": drivers}}))
}

pub fn driver_results_2023(driver_index: usize, rounds: usize) -> Value {
    let (id, ..) = GRID_2023[driver_index];
    let races: Vec<Value> = (1..=rounds)
        .map(|round| {
            let mut race = race_header(round);
            race["Results"] = json!([classification(driver_index)]);
            race
        })
        .collect();
    envelope(json!({"RaceTable": {"season": "2023", "driverId": id, "Races": races}}))
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Only answers when the page-size override is on the request.
pub async fn mount_paged_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("Not Found"))
        .mount(server)
        .await;
}

pub fn client_for(server: &MockServer) -> ErgastClient {
    ErgastClient::from_base_url(&server.uri()).expect("mock server uri is a valid base url")
}

/// Provider with every 2023 fixture mounted.
pub async fn provider_2023() -> MockServer {
    let server = MockServer::start().await;
    mount_paged_json(&server, "/2023/driverStandings.json", driver_standings_2023()).await;
    mount_paged_json(&server, "/2023/constructorStandings.json", constructor_standings_2023()).await;
    mount_json(&server, "/2023.json", schedule_2023()).await;
    mount_paged_json(&server, "/2023/drivers.json", roster_2023()).await;
    mount_json(
        &server,
        "/2023/drivers/max_verstappen/results.json",
        driver_results_2023(0, 3),
    )
    .await;
    mount_paged_json(&server, "/2023/1/results.json", race_results_2023_round_1()).await;
    mount_paged_json(&server, "/2023/1/qualifying.json", qualifying_2023_round_1()).await;
    mount_json(
        &server,
        "/2023/1/drivers/max_verstappen/pitstops.json",
        pit_stops_2023_round_1("max_verstappen"),
    )
    .await;
    server
}
