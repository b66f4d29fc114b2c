use sqlx::PgPool;

use joinmap_core::Result;

fn db_err(err: sqlx::Error) -> joinmap_core::Error {
    joinmap_core::Error::Db(err.to_string())
}

/// Relkind of the first user-schema relation matching `name`
/// case-insensitively, restricted to plain/partitioned tables and
/// plain/materialized views.
pub async fn fetch_relkind(pool: &PgPool, name: &str) -> Result<Option<String>> {
    let relkind = sqlx::query_scalar::<_, String>(
        r#"
        select c.relkind::text
        from pg_class c
        join pg_namespace n on n.oid = c.relnamespace
        where lower(c.relname) = lower($1)
          and c.relkind in ('r', 'p', 'v', 'm')
          and n.nspname <> 'information_schema'
          and n.nspname not like 'pg\_%'
        order by n.nspname <> 'public', n.nspname
        limit 1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await
    .map_err(db_err)?;

    Ok(relkind)
}

#[derive(sqlx::FromRow)]
pub struct RawForeignKey {
    pub name: String,
    pub referenced_table: String,
    pub columns: Vec<String>,
    pub referenced_columns: Vec<String>,
}

/// Foreign keys declared on `table`, with both column lists reassembled in
/// the order the constraint declares them.
///
/// The origin relation is resolved to a single oid with the same schema
/// preference as `fetch_relkind`, so a same-named table in another schema
/// never contributes constraints.
pub async fn list_foreign_keys(pool: &PgPool, table: &str) -> Result<Vec<RawForeignKey>> {
    let rows = sqlx::query_as::<_, RawForeignKey>(
        r#"
        with origin as (
          select c.oid
          from pg_class c
          join pg_namespace n on n.oid = c.relnamespace
          where lower(c.relname) = lower($1)
            and c.relkind in ('r', 'p', 'v', 'm')
            and n.nspname <> 'information_schema'
            and n.nspname not like 'pg\_%'
          order by n.nspname <> 'public', n.nspname
          limit 1
        )
        select
          con.conname::text as name,
          ref_rel.relname::text as referenced_table,
          array_agg(src_att.attname::text order by s_ord.ordinality) as columns,
          array_agg(ref_att.attname::text order by t_ord.ordinality) as referenced_columns
        from pg_constraint con
        join origin on origin.oid = con.conrelid
        join pg_class ref_rel on ref_rel.oid = con.confrelid
        join unnest(con.conkey) with ordinality as s_ord(attnum, ordinality) on true
        join pg_attribute src_att on src_att.attrelid = con.conrelid and src_att.attnum = s_ord.attnum
        join unnest(con.confkey) with ordinality as t_ord(attnum, ordinality)
          on t_ord.ordinality = s_ord.ordinality
        join pg_attribute ref_att on ref_att.attrelid = con.confrelid and ref_att.attnum = t_ord.attnum
        where con.contype = 'f'
        group by con.oid, con.conname, ref_rel.relname
        order by con.conname
        "#,
    )
    .bind(table)
    .fetch_all(pool)
    .await
    .map_err(db_err)?;

    Ok(rows)
}

/// Primary key columns of `table` in declared order, empty when the table has
/// no primary key.
///
/// Resolves the relation to one oid first, matching the schema preference of
/// `fetch_relkind`, so the answer comes from the same relation
/// `relation_kind` reported.
pub async fn get_primary_key_columns(pool: &PgPool, table: &str) -> Result<Vec<String>> {
    let columns = sqlx::query_scalar::<_, Vec<String>>(
        r#"
        with target as (
          select c.oid
          from pg_class c
          join pg_namespace n on n.oid = c.relnamespace
          where lower(c.relname) = lower($1)
            and c.relkind in ('r', 'p', 'v', 'm')
            and n.nspname <> 'information_schema'
            and n.nspname not like 'pg\_%'
          order by n.nspname <> 'public', n.nspname
          limit 1
        )
        select array_agg(att.attname::text order by ord.ordinality)
        from pg_constraint con
        join target on target.oid = con.conrelid
        join unnest(con.conkey) with ordinality as ord(attnum, ordinality) on true
        join pg_attribute att on att.attrelid = con.conrelid and att.attnum = ord.attnum
        where con.contype = 'p'
        group by con.oid
        "#,
    )
    .bind(table)
    .fetch_optional(pool)
    .await
    .map_err(db_err)?;

    Ok(columns.unwrap_or_default())
}
