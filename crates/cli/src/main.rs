mod client;

use std::io::{self, Write};

use anyhow::bail;
use clap::Parser;

use burnpin_common::{DEFAULT_HOST, DEFAULT_PORT, Pin};

use crate::client::Client;

#[derive(Parser, Debug)]
#[command(name = "burnpin-cli", about = "Cliente do burnpin")]
struct Args {
    #[arg(long, env = "BURNPIN_URL", default_value_t = default_url())]
    url: String,

    /// Comando para executar diretamente (modo não interativo)
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn default_url() -> String {
    format!("http://{DEFAULT_HOST}:{DEFAULT_PORT}")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let client = Client::new(&args.url);

    // Modo comando único (via argumentos)
    if !args.command.is_empty() {
        match execute(&client, &args.command).await {
            Ok(out) => println!("{out}"),
            Err(e) => {
                println!("(error) {e}");
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    println!("burnpin em {}", client.base());

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("burnpin> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break; // EOF
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        let tokens = tokenize(line);
        if tokens.is_empty() {
            continue;
        }

        match execute(&client, &tokens).await {
            Ok(out) => println!("{out}"),
            Err(e) => println!("(error) {e}"),
        }
    }

    Ok(())
}

/// Comando da linha já validado localmente, antes de ir para a rede.
#[derive(Debug, PartialEq)]
enum Request {
    Put { pin: Pin, content: String },
    Status(Pin),
    Consume(Pin),
    Ping,
    Help,
}

const HELP: &str = "\
put <pin> <conteúdo...>   publica conteúdo por 5 minutos
status <pin>              mostra se há conteúdo disponível
consume <pin>             lê o conteúdo (uma única vez)
ping                      keepalive do backend
quit | exit               sai do modo interativo";

fn parse_request(tokens: &[String]) -> anyhow::Result<Request> {
    let Some((name, rest)) = tokens.split_first() else {
        bail!("comando vazio");
    };

    let pin_arg = |rest: &[String]| -> anyhow::Result<Pin> {
        let raw = rest.first().map(|s| s.trim()).unwrap_or_default();
        Ok(Pin::parse(raw)?)
    };

    let req = match name.to_lowercase().as_str() {
        "put" | "set" => {
            let pin = pin_arg(rest)?;
            let content = rest.get(1..).unwrap_or_default().join(" ");
            let content = content.trim();
            if content.is_empty() {
                bail!("Content cannot be empty.");
            }
            Request::Put {
                pin,
                content: content.to_string(),
            }
        }
        "status" => Request::Status(pin_arg(rest)?),
        "consume" | "get" => Request::Consume(pin_arg(rest)?),
        "ping" => Request::Ping,
        "help" => Request::Help,
        other => bail!("comando desconhecido '{other}'. Digite 'help'"),
    };

    Ok(req)
}

async fn execute(client: &Client, tokens: &[String]) -> anyhow::Result<String> {
    let out = match parse_request(tokens)? {
        Request::Put { pin, content } => {
            let reply = client.put(&pin, &content).await?;
            format!("Published. Expires in {}s.", reply.expires_in_seconds)
        }
        Request::Status(pin) => {
            let reply = client.status(&pin).await?;
            if !reply.exists {
                "No content found or it has expired.".to_string()
            } else if reply.consumed {
                "Content was already copied once.".to_string()
            } else {
                format!("Available. Expires in ~{}s.", reply.expires_in_seconds)
            }
        }
        Request::Consume(pin) => client.consume(&pin).await?.content,
        Request::Ping => {
            let reply = client.ping().await?;
            format!("{} ({}, {})", reply.message, reply.pong, reply.timestamp)
        }
        Request::Help => HELP.to_string(),
    };

    Ok(out)
}

/// Tokeniza a linha de input com suporte a strings quoted.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;
    let mut quote_char = '"';
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quote {
            if c == quote_char {
                in_quote = false;
            } else if c == '\\' {
                match chars.peek() {
                    Some(&'n') => current.push('\n'),
                    Some(&'t') => current.push('\t'),
                    Some(&next @ ('\\' | '"' | '\'')) => current.push(next),
                    _ => {
                        current.push(c);
                        continue;
                    }
                }
                chars.next();
            } else {
                current.push(c);
            }
        } else if c == '"' || c == '\'' {
            in_quote = true;
            quote_char = c;
        } else if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
