use super::parsetree::Tree;
use crate::errors::{Error, Result};
use crate::grammar::{Grammar, NonTerminal, Symbol};
use crate::lexer::Token;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::rc::Rc;

/// An Earley item: a production, how much of its body has been recognized,
/// and the input position at which recognition of the production began
#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy)]
struct Item {
    production: usize,
    dot: usize,
    origin: usize,
}

impl Item {
    fn advance(&self) -> Item {
        Item {
            dot: self.dot + 1,
            ..*self
        }
    }
}

/// The item sets of an Earley chart, one per input position
struct ItemSets {
    sets: Vec<Vec<Item>>,
    seen: Vec<HashSet<Item>>,
}

impl ItemSets {
    fn new(positions: usize) -> ItemSets {
        ItemSets {
            sets: vec![Vec::new(); positions],
            seen: vec![HashSet::new(); positions],
        }
    }

    /// Adds an item to the set at position i, unless it is already there
    fn add(&mut self, i: usize, item: Item) {
        if self.seen[i].insert(item) {
            self.sets[i].push(item);
        }
    }
}

/// The completed edges found by the chart parser, from which parse trees
/// are enumerated
struct Chart<'g> {
    grammar: &'g Grammar,
    input: Vec<char>,
    completed: HashSet<(usize, usize, usize)>,
    ends: HashMap<(NonTerminal, usize), BTreeSet<usize>>,
    spans: RefCell<HashMap<(usize, usize, usize, usize), bool>>,
}

impl<'g> Chart<'g> {
    /// Returns true if the body of a production from the dot onwards can be
    /// matched against input[start..end]. Results are memoized, so tree
    /// enumeration only follows split points which lead to a tree.
    fn spans(&self, production: usize, dot: usize, start: usize, end: usize) -> bool {
        let key = (production, dot, start, end);
        if let Some(&known) = self.spans.borrow().get(&key) {
            return known;
        }

        let body = &self.grammar.production(production).body;
        let result = if dot == body.len() {
            start == end
        } else if end < start + body.len() - dot {
            // Every remaining symbol covers at least one token
            false
        } else {
            match body[dot] {
                Symbol::Terminal(c) => {
                    self.input[start] == c && self.spans(production, dot + 1, start + 1, end)
                }
                Symbol::NonTerminal(nt) => self.ends.get(&(nt, start)).map_or(false, |e| {
                    e.range(start + 1..=end)
                        .any(|&k| self.spans(production, dot + 1, k, end))
                }),
            }
        };

        self.spans.borrow_mut().insert(key, result);
        result
    }
}

/// A chart parser for a context-free grammar without ϵ-productions. The
/// parser holds no per-input state, so one instance can serve any number of
/// parses.
pub struct Parser<'g> {
    grammar: &'g Grammar,
}

/// All parses of one token sequence. Trees are only built as they are
/// pulled from the iterator returned by `trees`, which can be called any
/// number of times to restart the enumeration.
pub struct Forest<'g> {
    chart: Rc<Chart<'g>>,
}

/// A lazy iterator over the parse trees of a Forest
pub struct Trees<'g> {
    inner: Box<dyn Iterator<Item = Tree> + 'g>,
}

impl<'g> Parser<'g> {
    /// Creates a new chart parser for the given grammar
    pub fn new(grammar: &'g Grammar) -> Parser<'g> {
        Parser { grammar }
    }

    /// Parses a sequence of tokens. An error is returned if a token is not a
    /// single terminal of the grammar; otherwise the returned forest holds
    /// every derivation of the tokens from the start symbol, possibly none.
    pub fn parse(&self, tokens: &[Token]) -> Result<Forest<'g>> {
        let input = self.terminals(tokens)?;
        let n = input.len();

        // Algorithm adapted from Earley (1970), without ϵ-production handling
        let mut items = ItemSets::new(n + 1);
        let mut completed = HashSet::new();
        let mut ends: HashMap<(NonTerminal, usize), BTreeSet<usize>> = HashMap::new();

        for p in self.grammar.productions_for_non_terminal(self.grammar.start()) {
            items.add(
                0,
                Item {
                    production: *p,
                    dot: 0,
                    origin: 0,
                },
            );
        }

        for i in 0..=n {
            let mut j = 0;
            while j < items.sets[i].len() {
                let item = items.sets[i][j];
                j += 1;

                let production = self.grammar.production(item.production);
                match production.body.get(item.dot) {
                    None => {
                        // Complete: advance every item at the origin which
                        // was waiting for this non-terminal
                        completed.insert((item.production, item.origin, i));
                        ends.entry((production.head, item.origin))
                            .or_default()
                            .insert(i);

                        let waiting: Vec<Item> = items.sets[item.origin]
                            .iter()
                            .filter(|w| {
                                self.grammar.production(w.production).body.get(w.dot)
                                    == Some(&Symbol::NonTerminal(production.head))
                            })
                            .map(Item::advance)
                            .collect();

                        for w in waiting {
                            items.add(i, w);
                        }
                    }
                    Some(Symbol::NonTerminal(nt)) => {
                        // Predict
                        for p in self.grammar.productions_for_non_terminal(*nt) {
                            items.add(
                                i,
                                Item {
                                    production: *p,
                                    dot: 0,
                                    origin: i,
                                },
                            );
                        }
                    }
                    Some(Symbol::Terminal(c)) => {
                        // Scan
                        if i < n && input[i] == *c {
                            items.add(i + 1, item.advance());
                        }
                    }
                }
            }

            log::trace!("chart position {} holds {} items", i, items.sets[i].len());
        }

        log::debug!(
            "chart for {} tokens holds {} items and {} completed edges",
            n,
            items.sets.iter().map(Vec::len).sum::<usize>(),
            completed.len()
        );

        Ok(Forest {
            chart: Rc::new(Chart {
                grammar: self.grammar,
                input,
                completed,
                ends,
                spans: RefCell::new(HashMap::new()),
            }),
        })
    }

    /// Returns the terminal characters for a token sequence, or an error
    /// naming the first token the grammar does not cover
    fn terminals(&self, tokens: &[Token]) -> Result<Vec<char>> {
        tokens
            .iter()
            .map(|token| match token.terminal() {
                Some(c) if self.grammar.covers(c) => Ok(c),
                _ => Err(Error::no_derivation(
                    &tokens.iter().map(|t| t.text.as_str()).collect::<String>(),
                    format!(
                        "grammar does not cover input token '{}' at {}",
                        token, token.position
                    ),
                )),
            })
            .collect()
    }
}

impl<'g> Forest<'g> {
    /// Returns true if at least one derivation of the whole input exists
    pub fn accepts(&self) -> bool {
        let chart = &self.chart;
        chart
            .grammar
            .productions_for_non_terminal(chart.grammar.start())
            .iter()
            .any(|p| chart.completed.contains(&(*p, 0, chart.input.len())))
    }

    /// Returns a lazy iterator over all parse trees for the input, in the
    /// order given by the declaration order of the grammar's productions
    pub fn trees(&self) -> Trees<'g> {
        let start = self.chart.grammar.start();
        let end = self.chart.input.len();

        Trees {
            inner: trees(Rc::clone(&self.chart), start, 0, end),
        }
    }
}

impl<'g> IntoIterator for &Forest<'g> {
    type Item = Tree;
    type IntoIter = Trees<'g>;

    fn into_iter(self) -> Trees<'g> {
        self.trees()
    }
}

impl<'g> Iterator for Trees<'g> {
    type Item = Tree;

    fn next(&mut self) -> Option<Tree> {
        self.inner.next()
    }
}

/// Returns the trees rooted at nt which span input[start..end]
fn trees<'g>(
    chart: Rc<Chart<'g>>,
    nt: NonTerminal,
    start: usize,
    end: usize,
) -> Box<dyn Iterator<Item = Tree> + 'g> {
    let productions: Vec<usize> = chart
        .grammar
        .productions_for_non_terminal(nt)
        .iter()
        .copied()
        .filter(|p| chart.completed.contains(&(*p, start, end)))
        .collect();

    Box::new(productions.into_iter().flat_map(move |p| {
        log::trace!("expanding production {} over {}..{}", p, start, end);
        children(Rc::clone(&chart), p, 0, start, end).map(move |c| Tree::node(nt, c))
    }))
}

/// Returns the ways the body of a production from the dot onwards can be
/// matched against input[start..end], as sequences of child trees
fn children<'g>(
    chart: Rc<Chart<'g>>,
    production: usize,
    dot: usize,
    start: usize,
    end: usize,
) -> Box<dyn Iterator<Item = Vec<Tree>> + 'g> {
    if !chart.spans(production, dot, start, end) {
        return Box::new(std::iter::empty());
    }

    let grammar: &'g Grammar = chart.grammar;
    let body = &grammar.production(production).body;

    match body.get(dot) {
        None => Box::new(std::iter::once(Vec::new())),
        Some(&Symbol::Terminal(c)) => Box::new(
            children(chart, production, dot + 1, start + 1, end).map(move |mut rest| {
                rest.insert(0, Tree::Leaf(c));
                rest
            }),
        ),
        Some(&Symbol::NonTerminal(nt)) => {
            // Only split points where the rest of the body also matches, so
            // no subtree is built for a dead end
            let splits: Vec<usize> = chart
                .ends
                .get(&(nt, start))
                .map(|e| {
                    e.range(start + 1..=end)
                        .copied()
                        .filter(|&k| chart.spans(production, dot + 1, k, end))
                        .collect()
                })
                .unwrap_or_default();

            Box::new(splits.into_iter().flat_map(move |k| {
                let rest_chart = Rc::clone(&chart);
                trees(Rc::clone(&chart), nt, start, k).flat_map(move |first| {
                    children(Rc::clone(&rest_chart), production, dot + 1, k, end).map(
                        move |mut rest| {
                            rest.insert(0, first.clone());
                            rest
                        },
                    )
                })
            }))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::{split_runs, tokenize};

    fn parse_first(input: &str) -> Result<Option<Tree>> {
        let parser = Parser::new(Grammar::arithmetic());
        let forest = parser.parse(&tokenize(input))?;
        let first = forest.trees().next();
        Ok(first)
    }

    #[test]
    fn test_parse_tree() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tree = parse_first("a")?.ok_or("no tree")?;
        assert_eq!(tree.visualize(), "E→[T→[F→['a']]]");

        let tree = parse_first("a+b*c")?.ok_or("no tree")?;
        assert_eq!(tree.frontier(), "a+b*c");
        assert_eq!(
            tree.visualize(),
            "E→[E→[T→[F→['a']]] '+' T→[T→[F→['b']] '*' F→['c']]]"
        );

        Ok(())
    }

    #[test]
    fn test_parse_left_associative() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let tree = parse_first("1-2-3")?.ok_or("no tree")?;
        assert_eq!(
            tree.visualize(),
            "E→[E→[E→[T→[F→['1']]] '-' T→[F→['2']]] '-' T→[F→['3']]]"
        );

        let tree = parse_first("(a-b)/c")?.ok_or("no tree")?;
        assert_eq!(
            tree.visualize(),
            "E→[T→[T→[F→['(' E→[E→[T→[F→['a']]] '-' T→[F→['b']]] ')']] '/' F→['c']]]"
        );

        Ok(())
    }

    #[test]
    fn test_single_tree() -> Result<()> {
        let parser = Parser::new(Grammar::arithmetic());
        let forest = parser.parse(&tokenize("(a+1)*(b-2)/c"))?;

        assert!(forest.accepts());
        assert_eq!(forest.trees().count(), 1);

        // Enumeration restarts from the beginning
        assert_eq!(forest.trees().next(), forest.into_iter().next());

        Ok(())
    }

    #[test]
    fn test_long_chain() -> Result<()> {
        let parser = Parser::new(Grammar::arithmetic());
        let input = format!("{}a", "a-(b)*".repeat(59));
        let forest = parser.parse(&tokenize(&input))?;

        // Split points which cannot lead to a tree are never expanded, so
        // the whole enumeration stays cheap on long left-recursive chains
        let all: Vec<Tree> = forest.trees().collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].frontier(), input);

        Ok(())
    }

    #[test]
    fn test_no_tree() -> Result<()> {
        let parser = Parser::new(Grammar::arithmetic());

        for input in ["(a", "a+", "+a", "a)", "()", "ab", "a b", ""] {
            let tokens = split_runs(tokenize(input));
            let forest = parser.parse(&tokens)?;
            assert!(!forest.accepts(), "accepted {:?}", input);
            assert_eq!(forest.trees().next(), None);
        }

        Ok(())
    }

    #[test]
    fn test_uncovered_token() {
        let parser = Parser::new(Grammar::arithmetic());

        assert_eq!(
            parser.parse(&tokenize("ab+1")).map(|f| f.accepts()),
            Err(Error::no_derivation(
                "ab+1",
                "grammar does not cover input token 'ab' at 1:1"
            ))
        );
        assert_eq!(
            parser.parse(&tokenize("a * 12")).map(|f| f.accepts()),
            Err(Error::no_derivation(
                "a*12",
                "grammar does not cover input token '12' at 1:5"
            ))
        );
    }

    #[test]
    fn test_ambiguous_grammar() -> Result<()> {
        // Enumeration is lazy, so an ambiguous grammar still yields its first
        // tree without building the rest
        let g = Grammar::new("E → E '+' E | 'a'")?;
        let parser = Parser::new(&g);
        let forest = parser.parse(&tokenize("a+a+a"))?;

        let all: Vec<String> = forest.trees().map(|t| t.visualize()).collect();
        assert_eq!(
            all,
            vec![
                "E→[E→['a'] '+' E→[E→['a'] '+' E→['a']]]",
                "E→[E→[E→['a'] '+' E→['a']] '+' E→['a']]",
            ]
        );

        Ok(())
    }
}
