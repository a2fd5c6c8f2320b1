pub fn divisible_by_five<I>(values: I) -> impl Iterator<Item = i64>
where
    I: IntoIterator<Item = i64>,
{
    values.into_iter().filter(|n| n % 5 == 0)
}
