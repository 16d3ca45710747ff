use wf_fiction::InterpreterChain;

use crate::render::command_table;

/// Print every command the game understands, by situation.
pub fn run() -> Result<(), String> {
    let chains = [
        ("Exploring", InterpreterChain::scene()),
        ("Talking", InterpreterChain::conversation()),
    ];

    for (title, chain) in chains {
        println!("  {title}");
        println!("{}", command_table(&chain.supported_commands()));
        println!();
    }
    Ok(())
}
