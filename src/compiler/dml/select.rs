//! SELECT compilation, including the pagination strategies.

use crate::ast::expr::Expr;
use crate::ast::joins::TableSource;
use crate::ast::select::{OrderItem, Select, TopKind, TopSpec};
use crate::dialect::{CountStrategy, RangeStrategy};
use crate::error::{SqlForgeError, SqlForgeResult};

use super::super::Compiler;

pub(crate) fn build_select(c: &mut Compiler, select: &Select) -> SqlForgeResult<()> {
    c.out.enter();
    let result = build_select_inner(c, select);
    c.out.exit();
    result
}

fn build_select_inner(c: &mut Compiler, select: &Select) -> SqlForgeResult<()> {
    // Pagination is meaningful only for the outermost statement; nested
    // sub-selects never receive their own window.
    let top = if c.out.depth == 1 { select.top } else { None };
    if let Some(spec) = top {
        c.props.ensure_top(spec.kind)?;
        if spec.kind == TopKind::Range && spec.offset.is_none() {
            return Err(SqlForgeError::invalid(
                "Range pagination requires an offset",
            ));
        }
    }

    let windowed = matches!(top, Some(spec) if spec.kind == TopKind::Range)
        && c.props.range_strategy == RangeStrategy::RowNumberWindow;

    let outer_columns = if windowed {
        if select.order_by.is_empty() {
            return Err(SqlForgeError::invalid(
                "Range pagination with a window rewrite requires ORDER BY",
            ));
        }
        Some(outer_column_list(c, &select.columns)?)
    } else {
        None
    };

    let stmt_mark = windowed.then(|| c.out.mark());

    c.push("SELECT ");
    if select.distinct {
        c.push("DISTINCT ");
    }
    if let Some(spec) = top {
        if !windowed && c.props.count_strategy == CountStrategy::LeadingTop {
            match spec.kind {
                TopKind::Count => c.push(&format!("TOP {} ", spec.count)),
                TopKind::Percent => c.push(&format!("TOP {} PERCENT ", spec.count)),
                TopKind::Range => {}
            }
        }
    }

    let rownum_mark = windowed.then(|| c.out.mark());

    if select.columns.is_empty() {
        c.push("*");
    } else {
        for (i, column) in select.columns.iter().enumerate() {
            if i > 0 {
                c.push(", ");
            }
            c.write_select_item(column)?;
        }
    }

    match &select.source {
        Some(source) => {
            c.push(" FROM ");
            write_table_source(c, source)?;
        }
        None => {
            if !select.joins.is_empty() {
                return Err(SqlForgeError::invalid("JOIN requires a FROM source"));
            }
            if let Some(pseudo) = c.renderer.pseudo_table() {
                c.push(" FROM ");
                c.push(pseudo);
            }
        }
    }

    for join in &select.joins {
        c.push(" ");
        c.push(join.kind.keyword());
        c.push(" ");
        write_table_source(c, &join.source)?;
        if let Some(on) = &join.on {
            c.push(" ON ");
            c.write_cond(on)?;
        }
    }

    if let Some(filter) = &select.filter {
        c.push(" WHERE ");
        c.write_cond(filter)?;
    }

    if !select.group_by.is_empty() {
        c.push(" GROUP BY ");
        for (i, expr) in select.group_by.iter().enumerate() {
            if i > 0 {
                c.push(", ");
            }
            c.write_expr(expr)?;
        }
    }

    if let Some(having) = &select.having {
        c.push(" HAVING ");
        c.write_cond(having)?;
    }

    if windowed {
        // Two-phase rewrite: the inner statement is already emitted; splice
        // in the ROW_NUMBER projection and wrap it as a derived table.
        let spec = top.expect("windowed implies a top spec");
        let order_text = render_order_items(c, &select.order_by)?;
        let offset = spec.offset.unwrap_or(0);
        let first = offset + 1;
        let last = offset + spec.count;

        c.out.splice(
            &rownum_mark.expect("windowed select reserves a projection mark"),
            &format!("ROW_NUMBER() OVER (ORDER BY {}) AS _rowNum, ", order_text),
        );
        c.out.splice(
            &stmt_mark.expect("windowed select reserves a statement mark"),
            &format!(
                "SELECT {} FROM (",
                outer_columns.expect("windowed select precomputes outer columns")
            ),
        );
        c.push(&format!(
            ") AS _rowtable WHERE _rowNum BETWEEN {} AND {} ORDER BY {}",
            first, last, order_text
        ));
        return Ok(());
    }

    if !select.order_by.is_empty() {
        c.push(" ORDER BY ");
        let order_text = render_order_items(c, &select.order_by)?;
        c.push(&order_text);
    }

    if let Some(spec) = top {
        write_trailing_top(c, spec)?;
    }

    Ok(())
}

fn write_trailing_top(c: &mut Compiler, spec: TopSpec) -> SqlForgeResult<()> {
    match spec.kind {
        TopKind::Count => match c.props.count_strategy {
            CountStrategy::TrailingLimit => c.push(&format!(" LIMIT {}", spec.count)),
            CountStrategy::FetchFirst => {
                c.push(&format!(" FETCH FIRST {} ROWS ONLY", spec.count))
            }
            CountStrategy::LeadingTop => {}
        },
        TopKind::Percent => match c.props.count_strategy {
            CountStrategy::FetchFirst => {
                c.push(&format!(" FETCH FIRST {} PERCENT ROWS ONLY", spec.count))
            }
            // ensure_top has rejected Percent on every other profile.
            CountStrategy::TrailingLimit | CountStrategy::LeadingTop => {}
        },
        TopKind::Range => {
            let offset = spec.offset.unwrap_or(0);
            match c.props.range_strategy {
                RangeStrategy::TrailingLimit => {
                    c.push(&format!(" LIMIT {} OFFSET {}", spec.count, offset))
                }
                RangeStrategy::OffsetFetch => c.push(&format!(
                    " OFFSET {} ROWS FETCH NEXT {} ROWS ONLY",
                    offset, spec.count
                )),
                RangeStrategy::RowNumberWindow => {}
            }
        }
    }
    Ok(())
}

pub(crate) fn write_table_source(c: &mut Compiler, source: &TableSource) -> SqlForgeResult<()> {
    match source {
        TableSource::Table { name, alias } => {
            c.write_object_name(name);
            if let Some(alias) = alias {
                c.push(" ");
                c.write_identifier(alias);
            }
            Ok(())
        }
        TableSource::Subquery { query, alias } => {
            c.push("(");
            build_select(c, query)?;
            c.push(") ");
            c.write_identifier(alias);
            Ok(())
        }
    }
}

fn render_order_items(c: &mut Compiler, items: &[OrderItem]) -> SqlForgeResult<String> {
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        let expr = c.capture_expr(&item.expr)?;
        parts.push(format!("{} {}", expr, item.order.keyword()));
    }
    Ok(parts.join(", "))
}

/// The projection the windowing wrapper re-selects: the output name of every
/// inner column. Expressions without a derivable name cannot be re-selected
/// from the derived table.
fn outer_column_list(c: &Compiler, columns: &[Expr]) -> SqlForgeResult<String> {
    if columns.is_empty() {
        return Ok("*".to_string());
    }
    let mut names = Vec::with_capacity(columns.len());
    for column in columns {
        match column {
            Expr::Star => names.push("*".to_string()),
            other => match other.output_name() {
                Some(name) => names.push(c.renderer.quote_identifier(name)),
                None => {
                    return Err(SqlForgeError::invalid(
                        "Range pagination with a window rewrite requires an alias on every projected expression",
                    ))
                }
            },
        }
    }
    Ok(names.join(", "))
}
