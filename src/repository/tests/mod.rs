mod json_columns;
