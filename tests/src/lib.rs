#[cfg(test)]
mod icu;
