use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::{chart, CategoryTotals, Config, Result};

/// Totals the expenses by category and renders them as a bar chart.
pub async fn chart(config: &Config) -> Result<Out<CategoryTotals>> {
    let totals = config
        .db()
        .totals_by_category()
        .await
        .pub_result(ErrorType::Database)?;
    let rendered = chart::render(&totals, config.chart_width());
    Ok(Out::new(rendered, totals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_chart_empty() {
        let env = TestEnv::new().await;
        let out = chart(env.config()).await.unwrap();
        assert_eq!(chart::NO_DATA, out.message());
        assert!(out.structure().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chart() {
        let env = TestEnv::new().await;
        env.add("Food", 12.50, "2024-01-01", Some("lunch")).await;
        env.add("Food", 7.25, "2024-01-02", None).await;
        env.add("Transport", 20.00, "2024-01-03", Some("bus")).await;

        let out = chart(env.config()).await.unwrap();

        let totals = out.structure().unwrap();
        assert_eq!(Some(19.75), totals.get("Food"));
        assert_eq!(Some(20.00), totals.get("Transport"));
        assert!(out.message().starts_with(chart::TITLE));
        assert!(out.message().contains("19.75"));
        assert!(out.message().contains("20.00"));
    }
}
