pub mod schedule;

#[cfg(test)]
mod tests {
    mod evaluate;
    mod load;
    mod proptests;
    mod utils;
}
