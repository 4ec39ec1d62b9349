//! Template bodies for generated projects.
//!
//! Pure data. Bodies may reference `{{ module }}`, `{{ port }}` and the
//! `{{ db.* }}` connection defaults; nothing else is interpolated.

pub const MAIN_FIBER: &str = r#"package main

import (
	"log"

	"github.com/gofiber/fiber/v2"

	"{{ module }}/internal/database"
	"{{ module }}/internal/handlers"
	"{{ module }}/internal/repositories"
	"{{ module }}/internal/routes"
	"{{ module }}/internal/services"
	"{{ module }}/pkg/utils"
)

func main() {
	utils.InitialEnv()

	db, err := database.Connect()
	if err != nil {
		log.Fatalf("database connection failed: %v", err)
	}

	handler := handlers.NewHandler(services.NewService(repositories.NewRepository(db)))

	app := fiber.New()
	app.Get("/ping", func(c *fiber.Ctx) error {
		return c.JSON(fiber.Map{"message": "pong"})
	})
	routes.SetupRoutes(app, handler)

	port := utils.GetEnv("PORT", "{{ port }}")
	log.Printf("Fiber server is running on http://localhost:%s", port)
	log.Fatal(app.Listen(":" + port))
}
"#;

pub const MAIN_GIN: &str = r#"package main

import (
	"log"
	"net/http"

	"github.com/gin-gonic/gin"

	"{{ module }}/internal/database"
	"{{ module }}/internal/handlers"
	"{{ module }}/internal/repositories"
	"{{ module }}/internal/routes"
	"{{ module }}/internal/services"
	"{{ module }}/pkg/utils"
)

func main() {
	utils.InitialEnv()

	db, err := database.Connect()
	if err != nil {
		log.Fatalf("database connection failed: %v", err)
	}

	handler := handlers.NewHandler(services.NewService(repositories.NewRepository(db)))

	r := gin.Default()
	r.GET("/ping", func(c *gin.Context) {
		c.JSON(http.StatusOK, gin.H{"message": "pong"})
	})
	routes.SetupRoutes(r, handler)

	port := utils.GetEnv("PORT", "{{ port }}")
	log.Printf("Gin server is running on http://localhost:%s", port)
	log.Fatal(r.Run(":" + port))
}
"#;

pub const MAIN_ECHO: &str = r#"package main

import (
	"log"
	"net/http"

	"github.com/labstack/echo/v4"

	"{{ module }}/internal/database"
	"{{ module }}/internal/handlers"
	"{{ module }}/internal/repositories"
	"{{ module }}/internal/routes"
	"{{ module }}/internal/services"
	"{{ module }}/pkg/utils"
)

func main() {
	utils.InitialEnv()

	db, err := database.Connect()
	if err != nil {
		log.Fatalf("database connection failed: %v", err)
	}

	handler := handlers.NewHandler(services.NewService(repositories.NewRepository(db)))

	e := echo.New()
	e.GET("/ping", func(c echo.Context) error {
		return c.JSON(http.StatusOK, map[string]string{"message": "pong"})
	})
	routes.SetupRoutes(e, handler)

	port := utils.GetEnv("PORT", "{{ port }}")
	log.Printf("Echo server is running on http://localhost:%s", port)
	log.Fatal(e.Start(":" + port))
}
"#;

pub const MAIN_CHI: &str = r#"package main

import (
	"encoding/json"
	"log"
	"net/http"

	"github.com/go-chi/chi/v5"
	"github.com/go-chi/chi/v5/middleware"

	"{{ module }}/internal/database"
	"{{ module }}/internal/handlers"
	"{{ module }}/internal/repositories"
	"{{ module }}/internal/routes"
	"{{ module }}/internal/services"
	"{{ module }}/pkg/utils"
)

func main() {
	utils.InitialEnv()

	db, err := database.Connect()
	if err != nil {
		log.Fatalf("database connection failed: %v", err)
	}

	handler := handlers.NewHandler(services.NewService(repositories.NewRepository(db)))

	r := chi.NewRouter()
	r.Use(middleware.Logger)
	r.Get("/ping", func(w http.ResponseWriter, _ *http.Request) {
		w.Header().Set("Content-Type", "application/json")
		json.NewEncoder(w).Encode(map[string]string{"message": "pong"})
	})
	routes.SetupRoutes(r, handler)

	port := utils.GetEnv("PORT", "{{ port }}")
	log.Printf("Chi server is running on http://localhost:%s", port)
	log.Fatal(http.ListenAndServe(":"+port, r))
}
"#;

pub const MAIN_IRIS: &str = r#"package main

import (
	"log"

	"github.com/kataras/iris/v12"

	"{{ module }}/internal/database"
	"{{ module }}/internal/handlers"
	"{{ module }}/internal/repositories"
	"{{ module }}/internal/routes"
	"{{ module }}/internal/services"
	"{{ module }}/pkg/utils"
)

func main() {
	utils.InitialEnv()

	db, err := database.Connect()
	if err != nil {
		log.Fatalf("database connection failed: %v", err)
	}

	handler := handlers.NewHandler(services.NewService(repositories.NewRepository(db)))

	app := iris.New()
	app.Get("/ping", func(ctx iris.Context) {
		ctx.JSON(iris.Map{"message": "pong"})
	})
	routes.SetupRoutes(app, handler)

	port := utils.GetEnv("PORT", "{{ port }}")
	log.Printf("Iris server is running on http://localhost:%s", port)
	log.Fatal(app.Listen(":" + port))
}
"#;

pub const CONNECTOR_POSTGRES: &str = r#"package database

import (
	"database/sql"
	"fmt"

	_ "github.com/lib/pq"

	"{{ module }}/pkg/utils"
)

// Connect opens a PostgreSQL connection pool and verifies it with a ping.
func Connect() (*sql.DB, error) {
	dsn := fmt.Sprintf("host=%s port=%s user=%s password=%s dbname=%s sslmode=disable",
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	db, err := sql.Open("postgres", dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := db.Ping(); err != nil {
		db.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return db, nil
}
"#;

pub const CONNECTOR_MYSQL: &str = r#"package database

import (
	"database/sql"
	"fmt"

	_ "github.com/go-sql-driver/mysql"

	"{{ module }}/pkg/utils"
)

// Connect opens a MySQL connection pool and verifies it with a ping.
func Connect() (*sql.DB, error) {
	dsn := fmt.Sprintf("%s:%s@tcp(%s:%s)/%s?parseTime=true",
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	db, err := sql.Open("mysql", dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := db.Ping(); err != nil {
		db.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return db, nil
}
"#;

pub const CONNECTOR_SQLITE: &str = r#"package database

import (
	"database/sql"
	"fmt"

	_ "github.com/mattn/go-sqlite3"

	"{{ module }}/pkg/utils"
)

// Connect opens the SQLite database file and verifies it with a ping.
func Connect() (*sql.DB, error) {
	db, err := sql.Open("sqlite3", utils.GetEnv("DB_NAME", "{{ db.name }}"))
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := db.Ping(); err != nil {
		db.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return db, nil
}
"#;

pub const CONNECTOR_GORM_POSTGRES: &str = r#"package database

import (
	"fmt"

	"gorm.io/driver/postgres"
	"gorm.io/gorm"

	"{{ module }}/pkg/utils"
)

// Connect opens a GORM session backed by PostgreSQL.
func Connect() (*gorm.DB, error) {
	dsn := fmt.Sprintf("host=%s port=%s user=%s password=%s dbname=%s sslmode=disable",
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	db, err := gorm.Open(postgres.Open(dsn), &gorm.Config{})
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	return db, nil
}
"#;

pub const CONNECTOR_GORM_MYSQL: &str = r#"package database

import (
	"fmt"

	"gorm.io/driver/mysql"
	"gorm.io/gorm"

	"{{ module }}/pkg/utils"
)

// Connect opens a GORM session backed by MySQL.
func Connect() (*gorm.DB, error) {
	dsn := fmt.Sprintf("%s:%s@tcp(%s:%s)/%s?charset=utf8mb4&parseTime=True&loc=Local",
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	db, err := gorm.Open(mysql.Open(dsn), &gorm.Config{})
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	return db, nil
}
"#;

pub const CONNECTOR_GORM_SQLITE: &str = r#"package database

import (
	"fmt"

	"gorm.io/driver/sqlite"
	"gorm.io/gorm"

	"{{ module }}/pkg/utils"
)

// Connect opens a GORM session backed by an SQLite file.
func Connect() (*gorm.DB, error) {
	db, err := gorm.Open(sqlite.Open(utils.GetEnv("DB_NAME", "{{ db.name }}")), &gorm.Config{})
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	return db, nil
}
"#;

pub const CONNECTOR_XORM_POSTGRES: &str = r#"package database

import (
	"fmt"

	_ "github.com/lib/pq"
	"xorm.io/xorm"

	"{{ module }}/pkg/utils"
)

// Connect creates an XORM engine for PostgreSQL and verifies it with a ping.
func Connect() (*xorm.Engine, error) {
	dsn := fmt.Sprintf("host=%s port=%s user=%s password=%s dbname=%s sslmode=disable",
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	engine, err := xorm.NewEngine("postgres", dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := engine.Ping(); err != nil {
		engine.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return engine, nil
}
"#;

pub const CONNECTOR_XORM_MYSQL: &str = r#"package database

import (
	"fmt"

	_ "github.com/go-sql-driver/mysql"
	"xorm.io/xorm"

	"{{ module }}/pkg/utils"
)

// Connect creates an XORM engine for MySQL and verifies it with a ping.
func Connect() (*xorm.Engine, error) {
	dsn := fmt.Sprintf("%s:%s@tcp(%s:%s)/%s?charset=utf8mb4",
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	engine, err := xorm.NewEngine("mysql", dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := engine.Ping(); err != nil {
		engine.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return engine, nil
}
"#;

pub const CONNECTOR_XORM_SQLITE: &str = r#"package database

import (
	"fmt"

	_ "github.com/mattn/go-sqlite3"
	"xorm.io/xorm"

	"{{ module }}/pkg/utils"
)

// Connect creates an XORM engine for an SQLite file and verifies it with a ping.
func Connect() (*xorm.Engine, error) {
	engine, err := xorm.NewEngine("sqlite3", utils.GetEnv("DB_NAME", "{{ db.name }}"))
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := engine.Ping(); err != nil {
		engine.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return engine, nil
}
"#;

pub const CONNECTOR_ENT_POSTGRES: &str = r#"package database

import (
	"fmt"

	"entgo.io/ent/dialect"
	entsql "entgo.io/ent/dialect/sql"
	_ "github.com/lib/pq"

	"{{ module }}/pkg/utils"
)

// Connect opens an Ent SQL driver for PostgreSQL. Wrap it with the generated
// ent.NewClient(ent.Driver(drv)) once a schema exists.
func Connect() (*entsql.Driver, error) {
	dsn := fmt.Sprintf("host=%s port=%s user=%s password=%s dbname=%s sslmode=disable",
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	drv, err := entsql.Open(dialect.Postgres, dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := drv.DB().Ping(); err != nil {
		drv.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return drv, nil
}
"#;

pub const CONNECTOR_ENT_MYSQL: &str = r#"package database

import (
	"fmt"

	"entgo.io/ent/dialect"
	entsql "entgo.io/ent/dialect/sql"
	_ "github.com/go-sql-driver/mysql"

	"{{ module }}/pkg/utils"
)

// Connect opens an Ent SQL driver for MySQL. Wrap it with the generated
// ent.NewClient(ent.Driver(drv)) once a schema exists.
func Connect() (*entsql.Driver, error) {
	dsn := fmt.Sprintf("%s:%s@tcp(%s:%s)/%s?parseTime=True",
		utils.GetEnv("DB_USER", "{{ db.user }}"),
		utils.GetEnv("DB_PASSWORD", "{{ db.password }}"),
		utils.GetEnv("DB_HOST", "{{ db.host }}"),
		utils.GetEnv("DB_PORT", "{{ db.port }}"),
		utils.GetEnv("DB_NAME", "{{ db.name }}"),
	)

	drv, err := entsql.Open(dialect.MySQL, dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := drv.DB().Ping(); err != nil {
		drv.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return drv, nil
}
"#;

pub const CONNECTOR_ENT_SQLITE: &str = r#"package database

import (
	"fmt"

	"entgo.io/ent/dialect"
	entsql "entgo.io/ent/dialect/sql"
	_ "github.com/mattn/go-sqlite3"

	"{{ module }}/pkg/utils"
)

// Connect opens an Ent SQL driver for an SQLite file. Wrap it with the
// generated ent.NewClient(ent.Driver(drv)) once a schema exists.
func Connect() (*entsql.Driver, error) {
	dsn := fmt.Sprintf("file:%s?_fk=1", utils.GetEnv("DB_NAME", "{{ db.name }}"))

	drv, err := entsql.Open(dialect.SQLite, dsn)
	if err != nil {
		return nil, fmt.Errorf("open database: %w", err)
	}
	if err := drv.DB().Ping(); err != nil {
		drv.Close()
		return nil, fmt.Errorf("ping database: %w", err)
	}
	return drv, nil
}
"#;

pub const REPOSITORY_SQL: &str = r#"package repositories

import (
	"context"
	"database/sql"
)

type Repository interface {
	GetMessage(ctx context.Context) (string, error)
}

type repository struct {
	db *sql.DB
}

func NewRepository(db *sql.DB) Repository {
	return &repository{db: db}
}

func (r *repository) GetMessage(ctx context.Context) (string, error) {
	var message string
	if err := r.db.QueryRowContext(ctx, "SELECT 'data from repository'").Scan(&message); err != nil {
		return "", err
	}
	return message, nil
}
"#;

pub const REPOSITORY_GORM: &str = r#"package repositories

import (
	"context"

	"gorm.io/gorm"
)

type Repository interface {
	GetMessage(ctx context.Context) (string, error)
}

type repository struct {
	db *gorm.DB
}

func NewRepository(db *gorm.DB) Repository {
	return &repository{db: db}
}

func (r *repository) GetMessage(ctx context.Context) (string, error) {
	var result struct {
		Message string
	}
	if err := r.db.WithContext(ctx).Raw("SELECT 'data from repository' AS message").Scan(&result).Error; err != nil {
		return "", err
	}
	return result.Message, nil
}
"#;

pub const REPOSITORY_XORM: &str = r#"package repositories

import (
	"context"
	"errors"

	"xorm.io/xorm"
)

type Repository interface {
	GetMessage(ctx context.Context) (string, error)
}

type repository struct {
	engine *xorm.Engine
}

func NewRepository(engine *xorm.Engine) Repository {
	return &repository{engine: engine}
}

func (r *repository) GetMessage(ctx context.Context) (string, error) {
	rows, err := r.engine.Context(ctx).QueryString("SELECT 'data from repository' AS message")
	if err != nil {
		return "", err
	}
	if len(rows) == 0 {
		return "", errors.New("query returned no rows")
	}
	return rows[0]["message"], nil
}
"#;

pub const REPOSITORY_ENT: &str = r#"package repositories

import (
	"context"

	entsql "entgo.io/ent/dialect/sql"
)

type Repository interface {
	GetMessage(ctx context.Context) (string, error)
}

type repository struct {
	driver *entsql.Driver
}

func NewRepository(driver *entsql.Driver) Repository {
	return &repository{driver: driver}
}

// GetMessage returns a constant until an Ent schema is generated for the project.
func (r *repository) GetMessage(ctx context.Context) (string, error) {
	return "data from repository (ent)", nil
}
"#;

pub const SERVICE: &str = r#"package services

import (
	"context"

	"{{ module }}/internal/repositories"
)

type Service interface {
	GetMessage(ctx context.Context) (string, error)
}

type service struct {
	repo repositories.Repository
}

func NewService(repo repositories.Repository) Service {
	return &service{repo: repo}
}

func (s *service) GetMessage(ctx context.Context) (string, error) {
	return s.repo.GetMessage(ctx)
}
"#;

pub const HANDLER_FIBER: &str = r#"package handlers

import (
	"github.com/gofiber/fiber/v2"

	"{{ module }}/internal/services"
)

type Handler struct {
	service services.Service
}

func NewHandler(s services.Service) *Handler {
	return &Handler{service: s}
}

func (h *Handler) Get(c *fiber.Ctx) error {
	message, err := h.service.GetMessage(c.UserContext())
	if err != nil {
		return c.Status(fiber.StatusInternalServerError).JSON(fiber.Map{"error": err.Error()})
	}
	return c.JSON(fiber.Map{"message": message})
}
"#;

pub const HANDLER_GIN: &str = r#"package handlers

import (
	"net/http"

	"github.com/gin-gonic/gin"

	"{{ module }}/internal/services"
)

type Handler struct {
	service services.Service
}

func NewHandler(s services.Service) *Handler {
	return &Handler{service: s}
}

func (h *Handler) Get(c *gin.Context) {
	message, err := h.service.GetMessage(c.Request.Context())
	if err != nil {
		c.JSON(http.StatusInternalServerError, gin.H{"error": err.Error()})
		return
	}
	c.JSON(http.StatusOK, gin.H{"message": message})
}
"#;

pub const HANDLER_ECHO: &str = r#"package handlers

import (
	"net/http"

	"github.com/labstack/echo/v4"

	"{{ module }}/internal/services"
)

type Handler struct {
	service services.Service
}

func NewHandler(s services.Service) *Handler {
	return &Handler{service: s}
}

func (h *Handler) Get(c echo.Context) error {
	message, err := h.service.GetMessage(c.Request().Context())
	if err != nil {
		return c.JSON(http.StatusInternalServerError, map[string]string{"error": err.Error()})
	}
	return c.JSON(http.StatusOK, map[string]string{"message": message})
}
"#;

pub const HANDLER_CHI: &str = r#"package handlers

import (
	"encoding/json"
	"net/http"

	"{{ module }}/internal/services"
)

type Handler struct {
	service services.Service
}

func NewHandler(s services.Service) *Handler {
	return &Handler{service: s}
}

func (h *Handler) Get(w http.ResponseWriter, r *http.Request) {
	message, err := h.service.GetMessage(r.Context())
	if err != nil {
		http.Error(w, err.Error(), http.StatusInternalServerError)
		return
	}
	w.Header().Set("Content-Type", "application/json")
	json.NewEncoder(w).Encode(map[string]string{"message": message})
}
"#;

pub const HANDLER_IRIS: &str = r#"package handlers

import (
	"github.com/kataras/iris/v12"

	"{{ module }}/internal/services"
)

type Handler struct {
	service services.Service
}

func NewHandler(s services.Service) *Handler {
	return &Handler{service: s}
}

func (h *Handler) Get(ctx iris.Context) {
	message, err := h.service.GetMessage(ctx.Request().Context())
	if err != nil {
		ctx.StopWithJSON(iris.StatusInternalServerError, iris.Map{"error": err.Error()})
		return
	}
	ctx.JSON(iris.Map{"message": message})
}
"#;

pub const ROUTES_FIBER: &str = r#"package routes

import (
	"github.com/gofiber/fiber/v2"

	"{{ module }}/internal/handlers"
)

func SetupRoutes(app fiber.Router, h *handlers.Handler) {
	api := app.Group("/api")
	api.Get("/message", h.Get)
}
"#;

pub const ROUTES_GIN: &str = r#"package routes

import (
	"github.com/gin-gonic/gin"

	"{{ module }}/internal/handlers"
)

func SetupRoutes(router *gin.Engine, h *handlers.Handler) {
	api := router.Group("/api")
	api.GET("/message", h.Get)
}
"#;

pub const ROUTES_ECHO: &str = r#"package routes

import (
	"github.com/labstack/echo/v4"

	"{{ module }}/internal/handlers"
)

func SetupRoutes(e *echo.Echo, h *handlers.Handler) {
	api := e.Group("/api")
	api.GET("/message", h.Get)
}
"#;

pub const ROUTES_CHI: &str = r#"package routes

import (
	"github.com/go-chi/chi/v5"

	"{{ module }}/internal/handlers"
)

func SetupRoutes(r chi.Router, h *handlers.Handler) {
	r.Route("/api", func(api chi.Router) {
		api.Get("/message", h.Get)
	})
}
"#;

pub const ROUTES_IRIS: &str = r#"package routes

import (
	"github.com/kataras/iris/v12"

	"{{ module }}/internal/handlers"
)

func SetupRoutes(app *iris.Application, h *handlers.Handler) {
	api := app.Party("/api")
	api.Get("/message", h.Get)
}
"#;

pub const ENV: &str = r#"PORT={{ port }}
DB_USER={{ db.user }}
DB_PASSWORD={{ db.password }}
DB_HOST={{ db.host }}
DB_PORT={{ db.port }}
DB_NAME={{ db.name }}
"#;

pub const ENV_LOADER: &str = r#"package utils

import (
	"log"
	"os"

	"github.com/joho/godotenv"
)

// InitialEnv loads variables from .env when the file is present.
func InitialEnv() {
	if err := godotenv.Load(); err != nil {
		log.Println("no .env file found, using the process environment")
	}
}

// GetEnv returns the value of key, or fallback when it is unset.
func GetEnv(key, fallback string) string {
	if value, ok := os.LookupEnv(key); ok {
		return value
	}
	return fallback
}
"#;

pub const DOCKERFILE: &str = r#"FROM golang:1.22-alpine AS builder

WORKDIR /app

COPY go.mod go.sum ./
RUN go mod download

COPY . .
RUN CGO_ENABLED=0 GOOS=linux go build -o /app/server ./cmd

FROM alpine:3.20

WORKDIR /app
COPY --from=builder /app/server ./server

EXPOSE {{ port }}

CMD ["./server"]
"#;

pub const DOCKERFILE_CGO: &str = r#"FROM golang:1.22-alpine AS builder

RUN apk add --no-cache gcc musl-dev

WORKDIR /app

COPY go.mod go.sum ./
RUN go mod download

COPY . .
RUN CGO_ENABLED=1 GOOS=linux go build -o /app/server ./cmd

FROM alpine:3.20

WORKDIR /app
COPY --from=builder /app/server ./server

EXPOSE {{ port }}

CMD ["./server"]
"#;

pub const COMPOSE_POSTGRES: &str = r#"services:
  app:
    build: .
    ports:
      - "{{ port }}:{{ port }}"
    env_file:
      - .env
    environment:
      DB_HOST: db
    depends_on:
      - db

  db:
    image: postgres:16-alpine
    restart: unless-stopped
    environment:
      POSTGRES_USER: ${DB_USER}
      POSTGRES_PASSWORD: ${DB_PASSWORD}
      POSTGRES_DB: ${DB_NAME}
    ports:
      - "{{ db.port }}:5432"
    volumes:
      - db-data:/var/lib/postgresql/data

volumes:
  db-data:
"#;

pub const COMPOSE_MYSQL: &str = r#"services:
  app:
    build: .
    ports:
      - "{{ port }}:{{ port }}"
    env_file:
      - .env
    environment:
      DB_HOST: db
    depends_on:
      - db

  db:
    image: mysql:8.0
    restart: unless-stopped
    environment:
      MYSQL_ROOT_PASSWORD: ${DB_PASSWORD}
      MYSQL_DATABASE: ${DB_NAME}
    ports:
      - "{{ db.port }}:3306"
    volumes:
      - db-data:/var/lib/mysql

volumes:
  db-data:
"#;

pub const COMPOSE_SQLITE: &str = r#"services:
  app:
    build: .
    ports:
      - "{{ port }}:{{ port }}"
    env_file:
      - .env
    environment:
      DB_NAME: /app/data/{{ db.name }}
    volumes:
      - ./data:/app/data
"#;
