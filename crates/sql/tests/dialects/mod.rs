mod cockroach;
mod hsql;
mod oracle;
mod postgres;
