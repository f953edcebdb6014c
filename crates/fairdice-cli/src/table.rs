//! Win-probability help table.

use fairdice_core::{win_probability, DiceSet};
use prettytable::{Cell, Row, Table};

/// Build the pairwise win-probability table shown by the `?` help.
///
/// Rows are the player's candidate dice, columns the computer's; each cell
/// is the probability that the row die beats the column die.
pub fn probability_table(dice: &DiceSet) -> Table {
    let mut table = Table::new();

    let mut titles = vec![Cell::new("user dice v / computer dice >")];
    for die in dice.iter() {
        titles.push(Cell::new(&die.to_string()));
    }
    table.set_titles(Row::new(titles));

    for user_die in dice.iter() {
        let mut cells = vec![Cell::new(&user_die.to_string())];
        for computer_die in dice.iter() {
            let p = win_probability(user_die, computer_die);
            cells.push(Cell::new(&format!("{p:.4}")));
        }
        table.add_row(Row::new(cells));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use fairdice_core::Die;

    #[test]
    fn test_table_has_one_row_per_die() {
        let dice = DiceSet::new(vec![
            Die::new(vec![2, 2, 4, 4, 9, 9]),
            Die::new(vec![1, 1, 6, 6, 8, 8]),
            Die::new(vec![3, 3, 5, 5, 7, 7]),
        ]);

        let table = probability_table(&dice);
        assert_eq!(table.len(), 3);
    }
}
