use log::debug;
use recipe_ideas::render::render;
use recipe_ideas::{App, AppConfig, MealDbClient};
use std::io::{self, BufRead, Write};

const HELP: &str = "Type an ingredient to search, a result number to open it, \
'back' to close the detail view, 'quit' to exit.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    debug!("using API base {}", config.base_url);
    let client = MealDbClient::new(&config)?;
    let mut app = App::new(client);

    println!("{}", render(app.state()));
    println!("{}", HELP);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "back" => app.dismiss_detail(),
            _ => {
                if let Ok(index) = input.parse::<usize>() {
                    match app.state().results.get(index.wrapping_sub(1)) {
                        Some(meal) => {
                            let id = meal.id.clone();
                            app.select_meal(&id).await;
                        }
                        None => println!("No result #{}. {}", index, HELP),
                    }
                } else {
                    app.search(input).await;
                }
            }
        }

        println!("{}", render(app.state()));
    }

    Ok(())
}
