//! Human-readable dumps of a relation: a count line followed by one line
//! per tuple, attributes separated by single spaces.

use crate::storage::relation::Relation;
use std::fmt;
use std::io::{self, Write};

impl<const N: usize> fmt::Display for Relation<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Number of tuples in the relation: {}", self.tuple_count())?;
        for tuple in self {
            for (i, value) in tuple.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn write_relation<W: Write, const N: usize>(writer: &mut W, relation: &Relation<N>) -> io::Result<()> {
    write!(writer, "{}", relation)?;
    writer.flush()
}

pub fn print_relation<const N: usize>(relation: &Relation<N>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_relation(&mut handle, relation)
}

#[cfg(test)]
mod test {
    use crate::report::write_relation;
    use crate::storage::relation::Relation;

    #[test]
    fn display() {
        let relation: Relation<3> = vec![[4, 5, 6], [1, -2, 3]].into_iter().collect();
        assert_eq!(
            relation.to_string(),
            "Number of tuples in the relation: 2\n1 -2 3\n4 5 6\n"
        );
    }

    #[test]
    fn write_empty() {
        let mut out = Vec::new();
        write_relation(&mut out, &Relation::<1>::new()).unwrap();
        assert_eq!(out, b"Number of tuples in the relation: 0\n".to_vec());
    }
}
