pub mod args;
pub mod derive;
pub mod json;
pub mod parsetree;

use crate::derivation::Order;
use crate::engine::Engine;
use crate::errors::Result;
use crate::grammar::Grammar;
use args::{Format, Options};

/// Processes one expression and returns the text to show for it. In text
/// format a failed request is returned as an error; in JSON format it is
/// described by the returned document.
pub fn respond(engine: &Engine, options: &Options, input: &str) -> Result<String> {
    let engine_options = options.engine_options();
    let result = engine.process(input, &engine_options);

    if options.format == Format::Json {
        return json::render(input.trim(), engine_options.order, &result);
    }

    let outcome = result?;
    let mut output = format!(
        "Derivation ({}):\n{}",
        match engine_options.order {
            Order::Leftmost => "leftmost",
            Order::Rightmost => "leftmost, reversed",
        },
        derive::render_steps(&outcome.steps)
    );

    if options.forms {
        output.push_str("\nSentential forms:\n");
        output.push_str(&derive::render_forms(
            Grammar::arithmetic().start(),
            &outcome.full_tree,
        )?);
    }

    output.push_str("\nParse tree:\n");
    output.push_str(&parsetree::render(&outcome.full_tree, options.indent));
    output.push_str("\nAbstract syntax tree:\n");
    output.push_str(&parsetree::render(&outcome.ast_tree, options.indent));

    Ok(output)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::Error;
    use clap::Parser;

    #[test]
    fn test_respond_text() -> Result<()> {
        let options = Options::parse_from(["exprderive", "--forms"]);
        let output = respond(&Engine::new(), &options, "b")?;

        assert_eq!(
            output,
            concat!(
                "Derivation (leftmost):\n",
                "1: E → T\n",
                "2: T → F\n",
                "3: F → 'b'\n",
                "\n",
                "Sentential forms:\n",
                "0: E\n",
                "1: T\n",
                "2: F\n",
                "3: 'b'\n",
                "\n",
                "Parse tree:\n",
                "E\n",
                "└─T\n",
                "  └─F\n",
                "    └─'b'\n",
                "\n",
                "Abstract syntax tree:\n",
                "E\n",
                "└─T\n",
                "  └─F\n",
                "    └─'b'\n",
            )
        );

        Ok(())
    }

    #[test]
    fn test_respond_text_failure() {
        let options = Options::parse_from(["exprderive", "--order", "right"]);

        assert_eq!(
            respond(&Engine::new(), &options, "   "),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn test_respond_json_failure() -> Result<()> {
        let options = Options::parse_from(["exprderive", "--format", "json"]);
        let output = respond(&Engine::new(), &options, " a+ ")?;

        assert!(output.contains("\"input\": \"a+\""));
        assert!(output.contains("no derivation found for 'a+'"));

        Ok(())
    }
}
