use color_eyre::eyre::{Result, WrapErr, eyre};
use schemadraft::{ArrayItemKind, EditIntent, FieldId, FieldKind};

pub const HELP_TEXT: &str = "\
commands:
  add                    append a root field
  child <id>             append a child to a nested / array<nested> field
  name <id> [text]       rename a field (empty text clears the name)
  type <id> <kind>       string | number | float | boolean | array | nested | objectId
  item <id> <item-kind>  array element kind: string | number | float | boolean | nested
  rm <id>                delete a field and everything below it
  tree                   print the field outline
  show                   print the JSON preview
  help                   print this text
  quit                   stop reading commands";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(EditIntent),
    Tree,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = split_word(line);
        let command = match verb {
            "add" => Command::Edit(EditIntent::AddRoot),
            "child" => Command::Edit(EditIntent::AddChild {
                parent: parse_id(rest)?,
            }),
            "name" | "rename" => {
                let (id, name) = split_word(rest);
                Command::Edit(EditIntent::Rename {
                    id: parse_id(id)?,
                    name: name.to_string(),
                })
            }
            "type" => {
                let (id, kind) = split_word(rest);
                let id = parse_id(id)?;
                let kind = kind.parse::<FieldKind>()?;
                Command::Edit(EditIntent::Retype { id, kind })
            }
            "item" => {
                let (id, item) = split_word(rest);
                let id = parse_id(id)?;
                let item = item.parse::<ArrayItemKind>()?;
                Command::Edit(EditIntent::SetArrayItemKind { id, item })
            }
            "rm" | "delete" => Command::Edit(EditIntent::Delete {
                id: parse_id(rest)?,
            }),
            "tree" | "ls" => Command::Tree,
            "show" | "json" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(eyre!("unknown command '{other}' (try 'help')")),
        };
        Ok(Some(command))
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn parse_id(raw: &str) -> Result<FieldId> {
    if raw.is_empty() {
        return Err(eyre!("missing field id"));
    }
    raw.parse::<FieldId>()
        .wrap_err_with(|| format!("invalid field id '{raw}'"))
}
