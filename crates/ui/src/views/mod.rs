mod scripts;
mod show;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use show::ShowView;
