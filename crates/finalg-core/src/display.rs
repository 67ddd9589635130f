//! Human-readable reports.

use std::fmt;

use crate::algebra::Algebra;
use crate::error::Result;
use crate::table::CayleyTable;

fn yes_or_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn write_table(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    table: &CayleyTable,
    elements: &[String],
    use_names: bool,
) -> fmt::Result {
    if use_names {
        writeln!(f, "{} (showing names):", label)?;
        for row in table.to_names(elements) {
            writeln!(f, "  {:?}", row)?;
        }
    } else {
        writeln!(f, "{} (showing indices):", label)?;
        for a in 0..table.order() {
            writeln!(f, "  {:?}", table.row(a))?;
        }
    }
    Ok(())
}

/// Report renderer behind [`Algebra::about`].
struct About<'a> {
    algebra: &'a Algebra,
    max_size: usize,
    use_names: bool,
}

impl fmt::Display for About<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alg = self.algebra;
        writeln!(f, "{}: {}", alg.kind(), alg.name())?;
        writeln!(f, "Description: {}", alg.description())?;
        writeln!(f, "Order: {}", alg.order())?;
        writeln!(f, "Identity: {}", alg.identity().unwrap_or("None"))?;
        writeln!(f, "Associative? {}", yes_or_no(alg.is_associative()))?;
        writeln!(f, "Commutative? {}", yes_or_no(alg.is_commutative()))?;
        writeln!(f, "Has Inverses? {}", yes_or_no(alg.has_inverses()))?;

        if let Some(inverses) = alg.inverse_indices() {
            let w = alg.elements().iter().map(String::len).max().unwrap_or(0).max(7);
            writeln!(f, "Elements:")?;
            writeln!(f, "  {:>5}  {:>w$}  {:>w$}  {:>5}", "Index", "Name", "Inverse", "Order")?;
            for (idx, name) in alg.elements().iter().enumerate() {
                let order = match alg.element_order(name) {
                    Ok(Some(k)) => k.to_string(),
                    _ => "-".to_string(),
                };
                let inverse = &alg.elements()[inverses[idx]];
                writeln!(f, "  {:>5}  {:>w$}  {:>w$}  {:>5}", idx, name, inverse, order)?;
            }
        } else {
            writeln!(f, "Elements: {:?}", alg.elements())?;
        }

        let fits = alg.order() <= self.max_size;
        if fits {
            write_table(f, "Cayley Table", alg.table(), alg.elements(), self.use_names)?;
        } else {
            writeln!(
                f,
                "{} order is {} > {}, so the table is not output.",
                alg.kind(),
                alg.order(),
                self.max_size
            )?;
        }

        if let Some(mult) = alg.mult_table() {
            writeln!(f, "Mult. Identity: {}", alg.one().unwrap_or("None"))?;
            writeln!(f, "Mult. Commutative? {}", yes_or_no(mult.is_commutative()))?;
            if fits {
                write_table(f, "Mult. Table", mult, alg.elements(), self.use_names)?;
            }
        }
        Ok(())
    }
}

/// One proper subgroup with its normality already decided.
struct SubgroupLine<'a> {
    subgroup: &'a Algebra,
    normal: bool,
}

impl fmt::Display for SubgroupLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sub = self.subgroup;
        writeln!(f, "\n  {}:", sub.name())?;
        writeln!(f, "       order: {}", sub.order())?;
        writeln!(f, "    elements: {:?}", sub.elements())?;
        writeln!(f, "    abelian?: {}", sub.is_abelian())?;
        writeln!(f, "     normal?: {}", self.normal)
    }
}

impl Algebra {
    /// A multi-line report on this algebra.
    ///
    /// Tables are included only when the order is at most `max_size`. Groups
    /// list each element's index, inverse and order; rings and fields add
    /// their multiplicative identity and table.
    pub fn about(&self, max_size: usize, use_names: bool) -> String {
        About {
            algebra: self,
            max_size,
            use_names,
        }
        .to_string()
    }

    /// Report on the proper subgroups: order, elements, and whether each is
    /// abelian and normal. With `unique` only one subgroup per isomorphism
    /// class is listed.
    pub fn about_proper_subgroups(&self, unique: bool) -> Result<String> {
        let subgroups = if unique {
            self.unique_proper_subgroups(None)?
        } else {
            self.proper_subalgebras()?
        };

        let mut out = format!("Subgroups of {}:\n", self.name());
        for sub in &subgroups {
            let line = SubgroupLine {
                subgroup: sub,
                normal: self.is_normal(sub)?,
            };
            out.push_str(&line.to_string());
        }
        Ok(out)
    }
}

impl fmt::Display for Algebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{} order={}>", self.kind(), self.name(), self.order())
    }
}
