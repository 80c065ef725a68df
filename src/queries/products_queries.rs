use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{NewProduct, Product},
    planner::{PriceSort, ProductFilter, like_pattern},
};

const PRODUCT_COLUMNS: &str = "id, title, description, image, price";

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    query.push(" WHERE 1=1");

    if let ProductFilter::TitleOrDescriptionContains(text) = filter {
        let pattern = like_pattern(text);
        query.push(" AND (title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" ESCAPE '\\' OR description ILIKE ");
        query.push_bind(pattern);
        query.push(" ESCAPE '\\')");
    }
}

fn push_sort(query: &mut QueryBuilder<'_, Postgres>, sort: PriceSort) {
    query.push(" ORDER BY ");
    match sort {
        PriceSort::Ascending => {
            query.push("price ASC NULLS LAST, id ASC");
        }
        PriceSort::Descending => {
            query.push("price DESC NULLS LAST, id ASC");
        }
        PriceSort::Unspecified => {
            query.push("id ASC");
        }
    }
}

pub async fn find(
    pool: &PgPool,
    filter: &ProductFilter,
    sort: PriceSort,
    skip: i64,
    limit: i64,
) -> Result<Vec<Product>> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new(format!("SELECT {} FROM products", PRODUCT_COLUMNS));
    push_filter(&mut query, filter);
    push_sort(&mut query, sort);

    query.push(" LIMIT ");
    query.push_bind(limit);
    query.push(" OFFSET ");
    query.push_bind(skip);

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    Ok(products)
}

pub async fn count(pool: &PgPool, filter: &ProductFilter) -> Result<i64> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_filter(&mut query, filter);

    let (total,): (i64,) = query.build_query_as().fetch_one(pool).await?;

    Ok(total)
}

/// Counts matches but stops at `limit`, independent of any page offset.
pub async fn count_limited(pool: &PgPool, filter: &ProductFilter, limit: i64) -> Result<i64> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM (SELECT 1 FROM products");
    push_filter(&mut query, filter);
    query.push(" LIMIT ");
    query.push_bind(limit);
    query.push(") AS capped");

    let (capped,): (i64,) = query.build_query_as().fetch_one(pool).await?;

    Ok(capped)
}

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products ORDER BY id ASC",
        PRODUCT_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

// Postgres caps a statement at 65535 bind parameters; four per row.
const INSERT_CHUNK_ROWS: usize = 1000;

fn insert_statements(products: &[NewProduct]) -> Vec<QueryBuilder<'static, Postgres>> {
    products
        .chunks(INSERT_CHUNK_ROWS)
        .map(|chunk| {
            let mut query: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO products (title, description, image, price) ");
            query.push_values(chunk, |mut row, product| {
                row.push_bind(product.title.clone())
                    .push_bind(product.description.clone())
                    .push_bind(product.image.clone())
                    .push_bind(product.price);
            });
            query
        })
        .collect()
}

/// Writes every chunk inside one transaction, so a batch lands whole or not at all.
pub async fn insert_many(pool: &PgPool, products: Vec<NewProduct>) -> Result<u64> {
    if products.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut written = 0;
    for mut query in insert_statements(&products) {
        written += query.build().execute(&mut *tx).await?.rows_affected();
    }
    tx.commit().await?;

    Ok(written)
}
