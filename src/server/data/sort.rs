//! Parsing of the `sort` request parameter shared by the paginated repository queries.

use sea_orm::Order;

/// Splits `field[,asc|desc]` into a field name and direction.
///
/// The direction defaults to ascending; an unknown direction keyword is ignored the
/// same way. Returns `None` for a missing or empty parameter.
pub fn parse_sort(sort: Option<&str>) -> Option<(&str, Order)> {
    let sort = sort?.trim();
    let (field, direction) = match sort.split_once(',') {
        Some((field, direction)) => (field.trim(), direction.trim()),
        None => (sort, ""),
    };
    if field.is_empty() {
        return None;
    }

    let order = if direction.eq_ignore_ascii_case("desc") {
        Order::Desc
    } else {
        Order::Asc
    };

    Some((field, order))
}
