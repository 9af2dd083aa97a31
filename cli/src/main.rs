// Copyright  (C) 2020, Hove and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Hove (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

use structopt::StructOpt;

use mimir_cli::{logger, run_make_base, run_process_requests};

#[derive(StructOpt)]
#[structopt(
    name = "mimir_cli",
    about = "Build and query a transport catalogue.",
    rename_all = "snake_case"
)]
enum Options {
    /// Ingest a network description from stdin and persist the base snapshot.
    MakeBase,
    /// Load the base snapshot and answer the stat requests from stdin.
    ProcessRequests,
}

fn main() {
    logger::init_logger();
    if let Err(err) = run() {
        for cause in err.chain() {
            eprintln!("{}", cause);
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let options = Options::from_args();
    let stdin = std::io::stdin();
    match options {
        Options::MakeBase => run_make_base(stdin.lock()),
        Options::ProcessRequests => {
            let stdout = std::io::stdout();
            run_process_requests(stdin.lock(), stdout.lock())
        }
    }
}
