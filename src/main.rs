use anyhow::{Context, Result};
use todolists::aggregation::sort_todos;
use todolists::config::{Config, StorageBackend};
use todolists::logger;
use todolists::persistence;
use todolists::service::{Origin, Outcome, ServiceError, TodoService};

const USAGE: &str = "Usage: todolists [--json] <command>

Commands:
  lists                        Show all lists, incomplete first
  show <list>                  Show the todos of a list
  new-list <name>              Create a list
  rename-list <list> <name>    Rename a list
  delete-list <list>           Delete a list and its todos
  add <list> <name>            Add a todo to a list
  check <list> <todo>          Mark a todo as completed
  uncheck <list> <todo>        Mark a todo as not completed
  remove <list> <todo>         Delete a todo
  complete-all <list>          Mark every todo of a list as completed
  init-config                  Write a default configuration file";

fn parse_id(value: Option<&String>, what: &str) -> Result<i32> {
    let value = value.ok_or_else(|| anyhow::anyhow!("Missing {} id\n\n{}", what, USAGE))?;
    value
        .parse()
        .with_context(|| format!("Invalid {} id '{}'", what, value))
}

fn join_name(words: &[String]) -> String {
    words.join(" ")
}

fn report(result: Result<Outcome, ServiceError>) -> Result<()> {
    match result {
        Ok(outcome) => {
            println!("{}", outcome.message);
            Ok(())
        }
        Err(error) if error.is_recoverable() => {
            eprintln!("{}", error.user_message());
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

async fn run(service: &TodoService, command: &str, args: &[String], json: bool) -> Result<()> {
    match command {
        "lists" => {
            let summaries = service.overview().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summaries)?);
            } else if summaries.is_empty() {
                println!("No lists yet.");
            } else {
                for summary in summaries {
                    let mark = if summary.complete { "x" } else { " " };
                    println!(
                        "[{}] #{} {} ({}/{})",
                        mark, summary.id, summary.name, summary.remaining, summary.total
                    );
                }
            }
            Ok(())
        }
        "show" => {
            let id = parse_id(args.first(), "list")?;
            match service.load_list(id).await {
                Ok(list) if json => {
                    println!("{}", serde_json::to_string_pretty(&list)?);
                    Ok(())
                }
                Ok(list) => {
                    println!("#{} {}", list.id, list.name);
                    for (todo, _) in sort_todos(&list.todos) {
                        let mark = if todo.completed { "x" } else { " " };
                        println!("  [{}] #{} {}", mark, todo.id, todo.name);
                    }
                    Ok(())
                }
                Err(error) => report(Err(error)),
            }
        }
        "new-list" => report(service.create_list(&join_name(args)).await),
        "rename-list" => {
            let id = parse_id(args.first(), "list")?;
            report(service.rename_list(id, &join_name(&args[1..])).await)
        }
        "delete-list" => {
            let id = parse_id(args.first(), "list")?;
            report(service.delete_list(id, Origin::Page).await)
        }
        "add" => {
            let id = parse_id(args.first(), "list")?;
            report(service.create_todo(id, &join_name(&args[1..])).await)
        }
        "check" | "uncheck" => {
            let list_id = parse_id(args.first(), "list")?;
            let todo_id = parse_id(args.get(1), "todo")?;
            report(service.set_todo_completed(list_id, todo_id, command == "check").await)
        }
        "remove" => {
            let list_id = parse_id(args.first(), "list")?;
            let todo_id = parse_id(args.get(1), "todo")?;
            report(service.delete_todo(list_id, todo_id, Origin::Page).await)
        }
        "complete-all" => {
            let id = parse_id(args.first(), "list")?;
            report(service.complete_all_todos(id).await)
        }
        other => anyhow::bail!("Unknown command '{}'\n\n{}", other, USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|arg| arg == "--json");
    args.retain(|arg| arg != "--json");

    let Some((command, rest)) = args.split_first() else {
        println!("{}", USAGE);
        return Ok(());
    };

    if command == "init-config" {
        return Config::generate_default_config(Config::get_default_config_path()?);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;

    let session = persistence::load_session(&config.storage)?;
    let store = persistence::open(&config.storage, session.clone()).await?;
    let service = TodoService::new(store);

    let result = run(&service, command, rest, json).await;

    if config.storage.backend == StorageBackend::Session {
        session.lock().await.save(&config.storage.session_file)?;
    }

    result
}
