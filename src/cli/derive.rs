use crate::derivation::{self, Step};
use crate::errors::Result;
use crate::grammar::NonTerminal;
use crate::parsers::Tree;
use crate::utils::digit_width;

/// Returns the numbered list of derivation steps, one per line
pub fn render_steps(steps: &[Step]) -> String {
    let width = digit_width(steps.len());

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{:>w$}: {}\n", i + 1, step, w = width))
        .collect()
}

/// Returns the numbered sentential forms of the leftmost derivation of a
/// tree, starting with the start symbol as form 0
pub fn render_forms(start: NonTerminal, tree: &Tree) -> Result<String> {
    let forms = derivation::sentential_forms(start, &derivation::leftmost(tree))?;
    let width = digit_width(forms.len() - 1);

    Ok(forms
        .iter()
        .enumerate()
        .map(|(i, form)| {
            format!(
                "{:>w$}: {}\n",
                i,
                derivation::format_form(form),
                w = width
            )
        })
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::derivation::Order;
    use crate::engine::process;

    #[test]
    fn test_render_steps() -> Result<()> {
        let outcome = process("(a)", Order::Leftmost)?;

        assert_eq!(
            render_steps(&outcome.steps),
            concat!(
                "1: E → T\n",
                "2: T → F\n",
                "3: F → '(' E ')'\n",
                "4: E → T\n",
                "5: T → F\n",
                "6: F → 'a'\n",
            )
        );

        Ok(())
    }

    #[test]
    fn test_render_steps_width() -> Result<()> {
        let outcome = process("a+b+c+d", Order::Rightmost)?;
        let rendered = render_steps(&outcome.steps);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], " 1: F → 'd'");
        assert_eq!(lines[11], "12: E → E '+' T");

        Ok(())
    }

    #[test]
    fn test_render_forms() -> Result<()> {
        let outcome = process("a*b", Order::Rightmost)?;

        assert_eq!(
            render_forms(NonTerminal::E, &outcome.full_tree)?,
            concat!(
                "0: E\n",
                "1: T\n",
                "2: T '*' F\n",
                "3: F '*' F\n",
                "4: 'a' '*' F\n",
                "5: 'a' '*' 'b'\n",
            )
        );

        Ok(())
    }
}
