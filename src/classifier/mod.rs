mod expression;
mod feed;

pub use expression::{Expression, ExpressionScores};
pub use feed::ExpressionFeed;
