use simuvator::{init, print};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = init::parse_args();
    let mut sim = match init::build_simulation(&args) {
        Ok(sim) => sim,
        Err(e) => {
            print::err(format!("{:#}", e));
            std::process::exit(1);
        }
    };

    print::info(format!("Starting simulation at {}", sim.time()));

    // One tick per period, the first one fires immediately
    let mut interval = tokio::time::interval(args.period());
    loop {
        interval.tick().await;

        sim.tick();
        print::sim_state(&sim);

        if args.ticks != 0 && sim.ticks() >= args.ticks {
            break;
        }
    }

    print::ok(format!("Stopped after {} ticks at {}", sim.ticks(), sim.time()));
}
