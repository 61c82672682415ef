//! Runs the world without any interactive interface.

use crate::args::Args;
use toruslife_lib::World;

fn print_world(world: &World) {
    println!(
        "Gen: {}  Cells: {}  Total: {}  Communities: {}",
        world.generation(),
        world.grid().alive_count(),
        world.total_alive_cells(),
        world.count_communities()
    );
    print!("{}", world.grid());
    if !world.is_alive() {
        println!("All cells are dead.");
    }
}

/// Advances the world and prints the result.
pub(crate) fn run(args: Args) {
    let Args {
        mut world,
        generations,
        each,
    } = args;
    if each {
        print_world(&world);
        for _ in 0..generations {
            world.step();
            println!();
            print_world(&world);
        }
    } else {
        world.step_n(generations);
        print_world(&world);
    }
}
